//! Construction rules turning a closed frame into a value.

use indexmap::IndexMap;

use super::frame::{Frame, FrameKind};
use crate::coerce::{coerce_date, parse_decimal};
use crate::error::{MbxmlError, Result};
use crate::registry::{Construction, Registry, Shape};
use crate::value::{Value, DATA_FIELD};

type Fields = IndexMap<String, Value>;

/// Build the finished value of a closed frame.
pub(crate) fn build(registry: &Registry, frame: Frame) -> Result<Value> {
    let Frame {
        kind,
        attributes,
        mut children,
        text,
        ..
    } = frame;

    let kind = match kind {
        FrameKind::Scalar(coercer) => return coercer.apply(text.as_deref().unwrap_or_default()),
        FrameKind::Record(kind) => kind,
    };
    let shape = registry.shape_for(kind)?;

    let mut fields: Fields = attributes
        .into_iter()
        .map(|(name, value)| (name, Value::Str(value)))
        .collect();

    match shape.construction() {
        Construction::Record => merge_children(shape, &mut fields, children),
        Construction::Text => {
            fields.insert(DATA_FIELD.to_string(), Value::Str(text.unwrap_or_default()));
        }
        Construction::Decimal => {
            merge_children(shape, &mut fields, children);
            // Unrated entities send `<rating votes-count="0"/>`: no data.
            let text = text.as_deref().unwrap_or_default();
            if !text.trim().is_empty() {
                fields.insert(DATA_FIELD.to_string(), Value::Decimal(parse_decimal(text)?));
            }
        }
        Construction::List => {
            let elements = shape
                .element_tag()
                .and_then(|tag| children.shift_remove(tag))
                .unwrap_or_default();
            fields.insert(DATA_FIELD.to_string(), Value::List(elements));
        }
        Construction::Document => {
            return children
                .shift_remove("metadata")
                .and_then(|mut values| values.pop())
                .ok_or(MbxmlError::EmptyDocument);
        }
    }

    coerce_dates(shape, &mut fields)?;
    Ok(Value::Struct(fields))
}

/// Merge children after the attributes, collapsing singletons.
///
/// A child sharing its name with an attribute replaces the attribute value.
fn merge_children(shape: &Shape, fields: &mut Fields, children: IndexMap<String, Vec<Value>>) {
    for (tag, mut values) in children {
        let repeatable = shape.child_spec(&tag).is_some_and(|spec| spec.repeatable);
        let value = if repeatable {
            Value::List(values)
        } else {
            match values.pop() {
                Some(value) => value,
                None => continue,
            }
        };
        fields.insert(tag, value);
    }
}

fn coerce_dates(shape: &Shape, fields: &mut Fields) -> Result<()> {
    for name in shape.date_fields() {
        if let Some(slot) = fields.get_mut(*name) {
            *slot = coerce_date(slot.clone())?;
        }
    }
    Ok(())
}
