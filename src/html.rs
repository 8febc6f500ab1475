//! HTML serialization for inline nodes
//!
//! Converts inline nodes to HTML fragments by building real DOM nodes and
//! running the html5ever serializer over them, rather than concatenating
//! tag strings, so text content and attribute values are escaped by the
//! serializer.
//!
//! Styled spans become `<font>` elements carrying `data-mx-color` and
//! `data-mx-bg-color` attributes, the element shape chat clients expect for
//! colored message fragments.

use crate::error::RenderError;
use crate::ir::nodes::InlineNode;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Serialize one inline node to an HTML fragment.
pub fn serialize_inline(node: &InlineNode) -> Result<String, RenderError> {
    serialize_handle(&build_node(node))
}

/// Build the DOM node for an inline node.
fn build_node(node: &InlineNode) -> Handle {
    match node {
        InlineNode::Text(text) => create_text(text),

        InlineNode::Styled(span) => {
            let mut attrs: Vec<(&str, String)> = Vec::new();
            if let Some(foreground) = &span.foreground {
                attrs.push(("data-mx-color", foreground.to_string()));
            }
            if let Some(background) = &span.background {
                attrs.push(("data-mx-bg-color", background.to_string()));
            }

            let element = create_element("font", attrs);
            element.children.borrow_mut().push(create_text(&span.text));
            element
        }

        InlineNode::Tagged(span) => {
            let element = create_element(&span.tag, vec![]);
            element.children.borrow_mut().push(create_text(&span.text));
            element
        }
    }
}

/// Create an element node with the given attributes
fn create_element(tag: &str, attrs: Vec<(&str, String)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize a node and its children to an HTML string
fn serialize_handle(handle: &Handle) -> Result<String, RenderError> {
    let mut output = Vec::new();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    let serializable = SerializableHandle::from(handle.clone());
    serialize(&mut output, &serializable, opts)
        .map_err(|e| RenderError::SerializationError(format!("HTML serialization failed: {e}")))?;

    String::from_utf8(output)
        .map_err(|e| RenderError::SerializationError(format!("UTF-8 conversion failed: {e}")))
}
