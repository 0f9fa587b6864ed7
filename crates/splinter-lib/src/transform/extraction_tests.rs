use super::extraction::named_groups;
use crate::ParseResult;
use crate::ast::{Command, FieldMapping, LookupOutputMode};

#[test]
fn rex_named_groups() {
    let Command::Rex(cmd) = ParseResult::expect_command(
        r#"| rex field=msg max_match=2 "user=(?<user>\w+) from (?P<src>\S+)""#,
    ) else {
        panic!("expected rex");
    };
    assert_eq!(cmd.field, "msg");
    assert_eq!(cmd.max_match, Some(2));
    assert_eq!(cmd.pattern, r"user=(?<user>\w+) from (?P<src>\S+)");
    assert_eq!(cmd.extracted_fields, ["user", "src"]);
}

#[test]
fn rex_defaults_to_raw() {
    let Command::Rex(cmd) = ParseResult::expect_command(r#"| rex mode=sed "s/a/b/g""#) else {
        panic!("expected rex");
    };
    assert_eq!(cmd.field, "_raw");
    assert_eq!(cmd.mode.as_deref(), Some("sed"));
    assert!(cmd.extracted_fields.is_empty());
}

#[test]
fn pcre_only_patterns_fall_back_to_scanning() {
    assert_eq!(named_groups(r"(?<ip>\d+)(?=x)"), ["ip"]);
    assert_eq!(named_groups(r"(?<=a)(?<n>b)"), ["n"]);
    assert_eq!(named_groups(r"(?'q'x)(?!y)"), ["q"]);
    assert!(named_groups(r"\(?<no>").is_empty());
}

#[test]
fn regex_negated_field() {
    let Command::Regex(cmd) = ParseResult::expect_command(r#"| regex host!="^web""#) else {
        panic!("expected regex");
    };
    assert_eq!(cmd.field, "host");
    assert!(cmd.negated);
    assert_eq!(cmd.pattern, "^web");

    let Command::Regex(cmd) = ParseResult::expect_command(r#"| regex "\d{3}""#) else {
        panic!("expected regex");
    };
    assert_eq!(cmd.field, "_raw");
    assert!(!cmd.negated);
}

#[test]
fn lookup_mappings() {
    let Command::Lookup(cmd) = ParseResult::expect_command(
        "| lookup users uid AS user_id OUTPUTNEW name, email AS mail",
    ) else {
        panic!("expected lookup");
    };
    assert_eq!(cmd.table.as_deref(), Some("users"));
    assert_eq!(
        cmd.input_fields,
        [FieldMapping {
            field: "uid".to_string(),
            alias: Some("user_id".to_string()),
        }]
    );
    assert_eq!(cmd.output_mode, Some(LookupOutputMode::Outputnew));
    assert_eq!(cmd.output_fields.len(), 2);
    assert_eq!(cmd.output_fields[1].alias.as_deref(), Some("mail"));
}

#[test]
fn lookup_without_output() {
    let Command::Lookup(cmd) = ParseResult::expect_command("| lookup users uid") else {
        panic!("expected lookup");
    };
    assert_eq!(cmd.output_mode, None);
    assert!(cmd.output_fields.is_empty());
}

#[test]
fn inputlookup_where() {
    let Command::Inputlookup(cmd) =
        ParseResult::expect_command("| inputlookup hosts.csv where env=prod")
    else {
        panic!("expected inputlookup");
    };
    assert_eq!(cmd.table.as_deref(), Some("hosts.csv"));
    let where_clause = cmd.where_clause.expect("where clause");
    assert_eq!(where_clause.referenced_fields, ["env"]);
}

#[test]
fn outputlookup_table() {
    let Command::Outputlookup(cmd) =
        ParseResult::expect_command("| outputlookup append=true out.csv")
    else {
        panic!("expected outputlookup");
    };
    assert_eq!(cmd.table.as_deref(), Some("out.csv"));
    assert_eq!(cmd.options.get("append").map(String::as_str), Some("true"));
}

#[test]
fn spath_path_sources() {
    let Command::Spath(cmd) =
        ParseResult::expect_command("| spath input=json path=a.b output=x")
    else {
        panic!("expected spath");
    };
    assert_eq!(cmd.input.as_deref(), Some("json"));
    assert_eq!(cmd.path.as_deref(), Some("a.b"));
    assert_eq!(cmd.output.as_deref(), Some("x"));

    let Command::Spath(cmd) = ParseResult::expect_command("| spath a.b") else {
        panic!("expected spath");
    };
    assert_eq!(cmd.path.as_deref(), Some("a.b"));
}

#[test]
fn data_access_commands() {
    let Command::Rest(cmd) = ParseResult::expect_command("| rest /services/server/info") else {
        panic!("expected rest");
    };
    assert_eq!(cmd.endpoint.as_deref(), Some("/services/server/info"));

    let Command::Metadata(cmd) =
        ParseResult::expect_command("| metadata type=hosts index=main")
    else {
        panic!("expected metadata");
    };
    assert_eq!(cmd.metadata_type.as_deref(), Some("hosts"));

    let Command::Datamodel(cmd) = ParseResult::expect_command("| datamodel Web Web search")
    else {
        panic!("expected datamodel");
    };
    assert_eq!(cmd.model.as_deref(), Some("Web"));
    assert_eq!(cmd.mode.as_deref(), Some("search"));

    let Command::Loadjob(cmd) =
        ParseResult::expect_command(r#"| loadjob savedsearch="admin:app:report""#)
    else {
        panic!("expected loadjob");
    };
    assert_eq!(cmd.job.as_deref(), Some("admin:app:report"));

    let Command::Savedsearch(cmd) = ParseResult::expect_command("| savedsearch my_report")
    else {
        panic!("expected savedsearch");
    };
    assert_eq!(cmd.name.as_deref(), Some("my_report"));

    let Command::Collect(cmd) = ParseResult::expect_command("| collect index=summary") else {
        panic!("expected collect");
    };
    assert_eq!(cmd.index.as_deref(), Some("summary"));
}

#[test]
fn kv_is_extract() {
    let command = ParseResult::expect_command(r#"| kv pairdelim=",""#);
    assert!(matches!(command, Command::Extract(_)));
    assert_eq!(command.name(), "extract");
}

#[test]
fn generic_command_keeps_everything() {
    let Command::Generic(cmd) =
        ParseResult::expect_command("| mycmd a=1 b AS c by d [search x]")
    else {
        panic!("expected a generic command");
    };
    assert_eq!(cmd.command_name, "mycmd");
    assert_eq!(cmd.options.get("a").map(String::as_str), Some("1"));
    assert_eq!(cmd.arguments, ["b", "as", "c", "d"]);
    assert_eq!(cmd.subsearches.len(), 1);
}
