//! A borrowing, uniform view over AST nodes.
//!
//! Every named node of the tree carries a `name` and a `description`.
//! [`Node`] wraps a reference to any of them so traversal and reporting code
//! can dispatch on the variant instead of matching each concrete type.

use crate::ast::{
    Action, Blueprint, Parameter, Payload, PayloadKind, Resource, ResourceGroup,
    TransactionExample,
};

/// A reference to one node of a [`Blueprint`] tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Blueprint(&'a Blueprint),
    ResourceGroup(&'a ResourceGroup),
    Resource(&'a Resource),
    Action(&'a Action),
    TransactionExample(&'a TransactionExample),
    Payload(PayloadKind, &'a Payload),
    Parameter(&'a Parameter),
}

impl<'a> Node<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Node::Blueprint(n) => &n.name,
            Node::ResourceGroup(n) => &n.name,
            Node::Resource(n) => &n.name,
            Node::Action(n) => &n.name,
            Node::TransactionExample(n) => &n.name,
            Node::Payload(_, n) => &n.name,
            Node::Parameter(n) => &n.name,
        }
    }

    pub fn description(&self) -> &'a str {
        match self {
            Node::Blueprint(n) => &n.description,
            Node::ResourceGroup(n) => &n.description,
            Node::Resource(n) => &n.description,
            Node::Action(n) => &n.description,
            Node::TransactionExample(n) => &n.description,
            Node::Payload(_, n) => &n.description,
            Node::Parameter(n) => &n.description,
        }
    }

    /// A short human-readable name of the node category.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Blueprint(_) => "blueprint",
            Node::ResourceGroup(_) => "resource group",
            Node::Resource(_) => "resource",
            Node::Action(_) => "action",
            Node::TransactionExample(_) => "transaction example",
            Node::Payload(PayloadKind::Model, _) => "model",
            Node::Payload(PayloadKind::Request, _) => "request",
            Node::Payload(PayloadKind::Response, _) => "response",
            Node::Parameter(_) => "parameter",
        }
    }

    /// Direct children in document order.
    ///
    /// A resource model is listed only when it was declared.
    pub fn children(&self) -> Vec<Node<'a>> {
        match self {
            Node::Blueprint(n) => n.resource_groups.iter().map(Node::ResourceGroup).collect(),
            Node::ResourceGroup(n) => n.resources.iter().map(Node::Resource).collect(),
            Node::Resource(n) => {
                let model = (!n.model.is_empty()).then_some(Node::Payload(PayloadKind::Model, &n.model));
                model
                    .into_iter()
                    .chain(n.parameters.iter().map(Node::Parameter))
                    .chain(n.actions.iter().map(Node::Action))
                    .collect()
            }
            Node::Action(n) => n
                .parameters
                .iter()
                .map(Node::Parameter)
                .chain(n.examples.iter().map(Node::TransactionExample))
                .collect(),
            Node::TransactionExample(n) => n
                .requests
                .iter()
                .map(|p| Node::Payload(PayloadKind::Request, p))
                .chain(n.responses.iter().map(|p| Node::Payload(PayloadKind::Response, p)))
                .collect(),
            Node::Payload(..) | Node::Parameter(_) => Vec::new(),
        }
    }
}

impl Blueprint {
    /// All nodes of the tree in depth-first pre-order, starting with the root.
    pub fn nodes(&self) -> Vec<Node<'_>> {
        let mut nodes = Vec::new();
        let mut stack = vec![Node::Blueprint(self)];
        while let Some(node) = stack.pop() {
            let mut children = node.children();
            children.reverse();
            stack.extend(children);
            nodes.push(node);
        }
        nodes
    }
}
