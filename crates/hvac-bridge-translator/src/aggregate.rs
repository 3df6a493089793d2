// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Synthetic aggregate objects
//!
//! When the workspace schema has no inline room for a plural relation, the
//! parent points at a list object created just for it. Aggregates belong to
//! exactly one parent and are never memoized.

use crate::forward::ForwardContext;
use hvac_bridge_model::{FieldValue, Handle, ObjectGraph, ObjectType, SchemaRecord};

/// One kind of aggregate list
#[derive(Clone, Debug)]
pub(crate) struct AggregateKind {
    pub(crate) object_type: ObjectType,
    /// Appended to the parent's name
    pub(crate) suffix: &'static str,
}

pub(crate) const COMPRESSOR_LIST: AggregateKind = AggregateKind {
    object_type: ObjectType::RefrigerationCompressorList,
    suffix: "Compressor List",
};

pub(crate) const CASE_AND_WALKIN_LIST: AggregateKind = AggregateKind {
    object_type: ObjectType::RefrigerationCaseAndWalkInList,
    suffix: "Case and Walkin List",
};

/// Name of the aggregate owned by `parent_name`
pub(crate) fn aggregate_name(parent_name: &str, kind: &AggregateKind) -> String {
    format!("{} {}", parent_name, kind.suffix)
}

/// Build the aggregate for `members` and return it
///
/// Members are translated first; the list is created only when at least one
/// of them produced a target. Members that fail to translate are left out
/// and the aggregate keeps the order of the rest.
pub(crate) fn synthesize(
    ctx: &mut ForwardContext<'_>,
    parent: Handle,
    kind: &AggregateKind,
    members: &[Handle],
) -> Option<Handle> {
    let name = aggregate_name(&ctx.target_name(parent), kind);

    let mut member_names = Vec::with_capacity(members.len());
    for &member in members {
        match ctx.translate_and_map(member) {
            Some(target) => member_names.push(ctx.target_name(target)),
            None => {
                let model = ctx.model;
                ctx.log.warn(
                    model.get(member),
                    format!("Left out of '{}': translation failed", name),
                );
            }
        }
    }
    if member_names.is_empty() {
        return None;
    }

    let list = ctx.create_unmapped(kind.object_type.clone(), &name);
    for member_name in member_names {
        ctx.push_group(list, vec![FieldValue::Text(member_name)]);
    }
    Some(list)
}

/// Targets of one pointer column across every extensible group of a record
///
/// Unset or unresolvable slots come back as `None` so callers can report
/// them by position.
pub(crate) fn group_targets<G: ObjectGraph + ?Sized>(
    graph: &G,
    record: &SchemaRecord,
    offset: usize,
) -> Vec<Option<Handle>> {
    (0..record.num_groups())
        .map(|g| {
            let field = record.group_field_index(g, offset);
            graph.references().target(record.handle(), field)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use hvac_bridge_model::{fields::idf::refrigeration_compressor_list, Workspace};

    #[test]
    fn test_aggregate_name() {
        assert_eq!(aggregate_name("Sys1", &COMPRESSOR_LIST), "Sys1 Compressor List");
        assert_eq!(
            aggregate_name("Rack A", &CASE_AND_WALKIN_LIST),
            "Rack A Case and Walkin List"
        );
    }

    #[test]
    fn test_group_targets_reports_gaps() {
        let mut ws = Workspace::new();
        let list = ws.create_object(ObjectType::RefrigerationCompressorList, "L");
        let a = ws.create_object(ObjectType::RefrigerationCompressor, "A");
        ws.push_group(list, vec!["A".into()]).unwrap();
        ws.push_group(list, vec![FieldValue::Empty]).unwrap();

        let record = ws.get(list).unwrap();
        assert_eq!(
            group_targets(&ws, record, refrigeration_compressor_list::COMPRESSOR_NAME),
            vec![Some(a), None]
        );
    }
}
