//! Member classification.

use super::classification::MemberClassification;
use super::exclusions::{ExclusionList, CONSTRUCTOR};
use shared_types::ShapeBlueprint;
use std::collections::BTreeMap;

#[derive(Default)]
struct Merged {
    getter: bool,
    setter: bool,
    callable: bool,
}

/// Classify the members of `blueprint`.
///
/// Descriptors sharing a name are merged before classification, so a name
/// declared once as a method and once as an accessor is an accessor. The
/// constructor is skipped even when `exclusions` does not list it.
pub fn inspect(blueprint: &ShapeBlueprint, exclusions: &ExclusionList) -> MemberClassification {
    let mut merged: BTreeMap<&str, Merged> = BTreeMap::new();

    for member in &blueprint.members {
        let name = member.name.as_str();
        if name == CONSTRUCTOR || exclusions.contains(name) {
            continue;
        }
        let entry = merged.entry(name).or_default();
        entry.getter |= member.getter;
        entry.setter |= member.setter;
        entry.callable |= member.callable;
    }

    let mut accessors = Vec::new();
    let mut methods = Vec::new();
    let mut read_only = Vec::new();

    for (name, member) in merged {
        if member.getter || member.setter {
            if !member.setter {
                read_only.push(name.to_string());
            }
            accessors.push(name.to_string());
        } else if member.callable {
            methods.push(name.to_string());
        }
    }

    MemberClassification::from_parts(accessors, methods, read_only)
}
