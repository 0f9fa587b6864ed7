//! Describe a command or function from the metadata registries.

use serde::Serialize;
use splinter_core::{CommandInfo, FunctionInfo, get_command_info, get_function_info};
use splinter_lib::patterns;

use super::print_json;

pub struct InfoArgs {
    pub name: String,
    pub json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InfoOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    command: Option<&'static CommandInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    usage: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    function: Option<&'static FunctionInfo>,
}

pub fn run(args: InfoArgs) {
    // `replace` and friends are both a command and an eval function.
    let output = InfoOutput {
        command: get_command_info(&args.name),
        usage: patterns::usage(&args.name),
        function: get_function_info(&args.name),
    };

    if output.command.is_none() && output.function.is_none() {
        eprintln!("error: unknown command or function: {}", args.name);
        std::process::exit(1);
    }

    if args.json {
        print_json(&output);
        return;
    }

    let mut sections = Vec::new();
    if let Some(info) = output.command {
        sections.push(format_command(info, output.usage));
    }
    if let Some(info) = output.function {
        sections.push(format_function(info));
    }
    print!("{}", sections.join("\n"));
}

pub fn format_command(info: &CommandInfo, usage: Option<&str>) -> String {
    let mut out = format!("{} (command)\n", info.name);
    if !info.aliases.is_empty() {
        out.push_str(&format!("  aliases: {}\n", info.aliases.join(", ")));
    }
    out.push_str(&format!("  category: {}\n", info.category.as_str()));
    out.push_str(&format!("  {}\n", info.description));
    if let Some(usage) = usage {
        out.push_str(&format!("  usage: {}\n", usage));
    }

    let effects = [
        (info.effects.creates, "creates"),
        (info.effects.modifies, "modifies"),
        (info.effects.drops, "drops"),
    ];
    let named: Vec<&str> = effects
        .iter()
        .filter(|(on, _)| *on)
        .map(|(_, name)| *name)
        .collect();
    let named = if named.is_empty() {
        "none".to_string()
    } else {
        named.join(", ")
    };
    let others = if info.effects.preserves_others {
        "kept"
    } else {
        "dropped"
    };
    out.push_str(&format!(
        "  fields: {} (other fields {})\n",
        named, others
    ));
    if !info.implicit_fields.is_empty() {
        out.push_str(&format!(
            "  implicit fields: {}\n",
            info.implicit_fields.join(", ")
        ));
    }

    let risk = format!("{:?}", info.risk).to_lowercase();
    match info.risk_note {
        Some(note) => out.push_str(&format!("  risk: {} ({})\n", risk, note)),
        None => out.push_str(&format!("  risk: {}\n", risk)),
    }

    let mut traits = Vec::new();
    if info.generating {
        traits.push("generating");
    }
    if info.streaming {
        traits.push("streaming");
    }
    if !traits.is_empty() {
        out.push_str(&format!("  {}\n", traits.join(", ")));
    }
    out
}

pub fn format_function(info: &FunctionInfo) -> String {
    let params: Vec<String> = info
        .params
        .iter()
        .map(|p| {
            let name = if p.variadic {
                format!("{}...", p.name)
            } else {
                p.name.to_string()
            };
            if p.optional {
                format!("[{}]", name)
            } else {
                name
            }
        })
        .collect();

    let mut contexts = Vec::new();
    if info.context.allows_eval() {
        contexts.push("eval");
    }
    if info.context.allows_stats() {
        contexts.push("stats");
    }

    let mut out = format!("{} (function)\n", info.name);
    out.push_str(&format!("  category: {}\n", info.category.as_str()));
    out.push_str(&format!("  {}\n", info.description));
    out.push_str(&format!(
        "  signature: {}({}) -> {}\n",
        info.name,
        params.join(", "),
        format!("{:?}", info.return_type).to_lowercase()
    ));
    out.push_str(&format!("  usable in: {}\n", contexts.join(", ")));
    out
}
