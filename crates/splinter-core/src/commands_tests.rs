use std::collections::HashSet;

use crate::*;

#[test]
fn lookup_is_case_insensitive() {
    let info = get_command_info("STATS").unwrap();
    assert_eq!(info.name, "stats");
    assert_eq!(info.category, CommandCategory::Aggregation);
}

#[test]
fn lookup_resolves_aliases() {
    assert_eq!(get_command_info("bucket").unwrap().name, "bin");
    assert_eq!(get_command_info("KV").unwrap().name, "extract");
}

#[test]
fn unknown_command_is_none() {
    assert!(get_command_info("frobnicate").is_none());
    assert!(!command_drops_fields("frobnicate"));
}

#[test]
fn names_and_aliases_are_unique() {
    let mut seen = HashSet::new();
    for info in COMMANDS {
        assert!(seen.insert(info.name), "duplicate command {}", info.name);
        for alias in info.aliases {
            assert!(seen.insert(alias), "duplicate alias {}", alias);
        }
    }
}

#[test]
fn names_are_lowercase() {
    for info in COMMANDS {
        assert_eq!(info.name, info.name.to_ascii_lowercase());
    }
}

#[test]
fn replacing_commands_drop_fields() {
    for name in ["stats", "chart", "timechart", "table", "fields", "top"] {
        assert!(command_drops_fields(name), "{name} should drop fields");
    }
    for name in ["eval", "eventstats", "streamstats", "rename", "where"] {
        assert!(!command_drops_fields(name), "{name} should keep fields");
    }
}

#[test]
fn preserving_variants_of_stats() {
    let effects = |n| get_command_info(n).unwrap().effects;
    assert!(!effects("stats").preserves_others);
    assert!(effects("eventstats").preserves_others);
    assert!(effects("streamstats").preserves_others);
}

#[test]
fn field_creating_commands() {
    let creators = get_field_creating_commands();
    for name in ["eval", "rex", "lookup", "transaction", "makeresults", "stats"] {
        assert!(creators.contains(&name), "{name} missing");
    }
    assert!(!creators.contains(&"sort"));
    assert!(!creators.contains(&"head"));
}

#[test]
fn implicit_fields() {
    let info = get_command_info("transaction").unwrap();
    insta::assert_snapshot!(info.implicit_fields.join(" "), @"duration eventcount closed_txn field_match_sum linecount");
    assert_eq!(get_command_info("makeresults").unwrap().implicit_fields, &["_time"]);
}

#[test]
fn commands_by_category() {
    let names: Vec<_> = get_commands_by_category(CommandCategory::Multivalue)
        .iter()
        .map(|c| c.name)
        .collect();
    insta::assert_snapshot!(names.join(" "), @"makemv mvexpand mvcombine nomv");
}

#[test]
fn generating_commands_are_not_streaming() {
    for info in COMMANDS.iter().filter(|c| c.generating) {
        assert!(!info.streaming, "{} is generating and streaming", info.name);
    }
}

#[test]
fn risky_commands_explain_themselves() {
    for info in COMMANDS {
        if info.risk >= PerformanceRisk::Medium {
            assert!(info.risk_note.is_some(), "{} needs a note", info.name);
        }
    }
    assert_eq!(get_command_info("map").unwrap().risk, PerformanceRisk::High);
}

#[test]
fn serializes_camel_case() {
    let json = serde_json::to_value(get_command_info("rangemap").unwrap()).unwrap();
    assert_eq!(json["name"], "rangemap");
    assert_eq!(json["category"], "fieldCreation");
    assert_eq!(json["effects"]["preservesOthers"], true);
    assert_eq!(json["implicitFields"][0], "range");
}

#[test]
fn catalog_size() {
    assert!(COMMANDS.len() >= 100, "only {} commands", COMMANDS.len());
    assert_eq!(command_names().count(), COMMANDS.len());
}
