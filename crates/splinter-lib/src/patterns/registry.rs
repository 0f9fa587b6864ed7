//! The command syntax table.
//!
//! One entry per command keyword, in keyword order. Patterns describe the
//! arguments after the keyword and are at least as permissive as the
//! grammar rule that parses the same command.

use super::{CommandSyntax, FieldEffect, OptionSpec, Param, ParamType, Pattern};

macro_rules! kw {
    ($text:literal) => {
        Pattern::Keyword($text)
    };
}

macro_rules! param {
    ($name:literal, $ty:ident) => {
        param!($name, $ty, None)
    };
    ($name:literal, $ty:ident, $effect:ident) => {
        Pattern::Param(Param {
            name: $name,
            ty: ParamType::$ty,
            effect: FieldEffect::$effect,
        })
    };
}

macro_rules! seq {
    ($($p:expr),* $(,)?) => {
        Pattern::Seq(&[$($p),*])
    };
}

macro_rules! choice {
    ($($p:expr),* $(,)?) => {
        Pattern::Choice(&[$($p),*])
    };
}

macro_rules! opt {
    ($p:expr) => {
        Pattern::Optional(&$p)
    };
}

/// `min` or more items, commas allowed between them.
macro_rules! repeat {
    ($p:expr, $min:literal) => {
        Pattern::Repeat {
            pattern: &$p,
            separator: Some(","),
            min: $min,
        }
    };
}

macro_rules! options {
    ($($name:ident: $ty:ident),* $(,)?) => {
        Pattern::Options(&[$(OptionSpec {
            name: stringify!($name),
            ty: ParamType::$ty,
        }),*])
    };
}

macro_rules! command {
    ($name:literal, $usage:literal, $syntax:expr) => {
        command!($name, [], $usage, $syntax)
    };
    ($name:literal, [$($alias:literal),*], $usage:literal, $syntax:expr) => {
        CommandSyntax {
            name: $name,
            aliases: &[$($alias),*],
            usage: $usage,
            syntax: &$syntax,
        }
    };
}

// ============================================================================
// Shared shapes
// ============================================================================

const NO_ARGS: Pattern = seq![];

const ANY_OPTIONS: Pattern = options![];

const BY_CLAUSE: Pattern = seq![choice![kw!("by"), kw!("groupby")], param!("by", FieldList)];

const OVER_CLAUSE: Pattern = seq![kw!("over"), param!("over", Field)];

const ALIAS: Pattern = seq![kw!("as"), param!("alias", Field, Creates)];

const AGGREGATION: Pattern = seq![param!("aggregation", Aggregation, Creates), opt!(ALIAS)];

const STATS: Pattern = repeat!(
    choice![
        AGGREGATION,
        BY_CLAUSE,
        OVER_CLAUSE,
        options![
            allnum: Boolean,
            delim: String,
            partitions: Integer,
            span: TimeSpan,
            bins: Integer,
            limit: Integer,
            useother: Boolean,
            usenull: Boolean,
            window: Integer,
            current: Boolean,
            global: Boolean,
            reset_on_change: Boolean,
            time_window: TimeSpan,
            cont: Boolean,
        ],
    ],
    1
);

const TOP: Pattern = seq![
    opt!(param!("limit", Integer)),
    repeat!(
        choice![
            param!("fields", FieldList),
            BY_CLAUSE,
            options![
                limit: Integer,
                countfield: Name,
                percentfield: Name,
                showcount: Boolean,
                showperc: Boolean,
                useother: Boolean,
                otherstr: String,
            ],
        ],
        1
    ),
];

const APPEND: Pattern = seq![
    options![
        extendtimerange: Boolean,
        maxtime: Integer,
        maxout: Integer,
        timeout: Integer,
        override: Boolean,
    ],
    param!("subsearch", Subsearch),
];

const SORT_FIELD: Pattern = seq![
    opt!(choice![kw!("+"), kw!("-")]),
    choice![
        seq![
            param!("function", Name),
            kw!("("),
            param!("field", Field),
            kw!(")"),
        ],
        param!("field", WildcardField),
    ],
];

/// `fn(field) [AS alias]` for convert and trendline.
const FIELD_CALL: Pattern = seq![
    param!("function", Name),
    kw!("("),
    opt!(param!("field", WildcardField)),
    kw!(")"),
    opt!(ALIAS),
];

const LOOKUP_MAPPING: Pattern = seq![
    param!("field", Field),
    opt!(seq![kw!("as"), param!("alias", Field)]),
];

const LOOKUP_OUTPUT: Pattern = seq![
    param!("field", Field, Creates),
    opt!(seq![kw!("as"), param!("alias", Field, Creates)]),
];

// ============================================================================
// Registry
// ============================================================================

pub static COMMAND_SYNTAX: &[CommandSyntax] = &[
    command!(
        "search",
        "search <search-expression>",
        opt!(param!("search", SearchExpression))
    ),
    command!("where", "where <expression>", param!("condition", Expression)),
    command!(
        "eval",
        "eval <field>=<expression> [, <field>=<expression>]...",
        repeat!(
            seq![
                param!("field", Field, Creates),
                kw!("="),
                param!("expression", Expression),
            ],
            1
        )
    ),
    command!(
        "fieldformat",
        "fieldformat <field>=<expression> [, <field>=<expression>]...",
        repeat!(
            seq![
                param!("field", Field, Modifies),
                kw!("="),
                param!("expression", Expression),
            ],
            1
        )
    ),
    command!(
        "stats",
        "stats <aggregation> [AS <alias>]... [BY <field-list>]",
        STATS
    ),
    command!(
        "eventstats",
        "eventstats <aggregation> [AS <alias>]... [BY <field-list>]",
        STATS
    ),
    command!(
        "streamstats",
        "streamstats [window=<int>] <aggregation> [AS <alias>]... [BY <field-list>]",
        STATS
    ),
    command!(
        "chart",
        "chart <aggregation> [AS <alias>]... [OVER <field>] [BY <field>]",
        STATS
    ),
    command!(
        "timechart",
        "timechart [span=<time>] <aggregation> [AS <alias>]... [BY <field>]",
        STATS
    ),
    command!(
        "tstats",
        "tstats <aggregation>... [FROM datamodel=<name>] [WHERE <search>] [BY <field-list>]",
        repeat!(
            choice![
                AGGREGATION,
                seq![
                    kw!("from"),
                    options![datamodel: Name],
                    opt!(param!("datamodel", Name)),
                ],
                seq![kw!("where"), param!("where", SearchExpression)],
                BY_CLAUSE,
                options![
                    summariesonly: Boolean,
                    allow_old_summaries: Boolean,
                    prestats: Boolean,
                    local: Boolean,
                    append: Boolean,
                    chunk_size: Integer,
                ],
            ],
            1
        )
    ),
    command!(
        "rename",
        "rename <field> AS <new-name> [, <field> AS <new-name>]...",
        repeat!(
            seq![
                param!("field", WildcardField, Drops),
                kw!("as"),
                param!("new_name", WildcardField, Creates),
            ],
            1
        )
    ),
    command!(
        "rex",
        "rex [field=<field>] [mode=sed] [max_match=<int>] \"<regex>\"",
        seq![
            options![
                field: Field,
                mode: Name,
                max_match: Integer,
                offset_field: Field,
            ],
            param!("regex", Regex, Creates),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "regex",
        "regex [<field>=|<field>!=] \"<regex>\"",
        seq![
            opt!(seq![param!("field", Field), choice![kw!("="), kw!("!=")]]),
            param!("regex", Regex),
        ]
    ),
    command!(
        "lookup",
        "lookup <table> <field> [AS <alias>]... [OUTPUT|OUTPUTNEW <field> [AS <alias>]...]",
        seq![
            options![local: Boolean, update: Boolean],
            param!("table", Name),
            repeat!(LOOKUP_MAPPING, 1),
            ANY_OPTIONS,
            opt!(seq![
                choice![kw!("output"), kw!("outputnew")],
                repeat!(LOOKUP_OUTPUT, 1),
            ]),
        ]
    ),
    command!(
        "inputlookup",
        "inputlookup [append=<bool>] <table> [WHERE <search>]",
        seq![
            options![append: Boolean, start: Integer, max: Integer],
            param!("table", Name),
            ANY_OPTIONS,
            opt!(seq![kw!("where"), param!("where", SearchExpression)]),
        ]
    ),
    command!(
        "outputlookup",
        "outputlookup [append=<bool>] [create_empty=<bool>] <table>",
        seq![
            options![
                append: Boolean,
                create_empty: Boolean,
                override_if_empty: Boolean,
                max: Integer,
                key_field: Field,
                createinapp: Boolean,
            ],
            param!("table", Name),
            ANY_OPTIONS,
        ]
    ),
    command!("table", "table <field-list>", param!("fields", FieldList)),
    command!(
        "fields",
        "fields [+|-] <field-list>",
        seq![opt!(choice![kw!("+"), kw!("-")]), param!("fields", FieldList)]
    ),
    command!(
        "dedup",
        "dedup [<int>] <field-list> [keepevents=<bool>] [SORTBY <sort-field>...]",
        seq![
            opt!(param!("count", Integer)),
            repeat!(
                choice![
                    param!("fields", FieldList),
                    options![
                        keepevents: Boolean,
                        keepempty: Boolean,
                        consecutive: Boolean,
                    ],
                    seq![kw!("sortby"), repeat!(SORT_FIELD, 1)],
                ],
                1
            ),
        ]
    ),
    command!(
        "sort",
        "sort [<int>] [+|-]<field>... [desc]",
        seq![
            opt!(param!("limit", Integer)),
            repeat!(choice![SORT_FIELD, options![limit: Integer]], 1),
        ]
    ),
    command!(
        "head",
        "head [<int>] [limit=<int>] [<expression>]",
        seq![
            opt!(param!("limit", Integer)),
            options![limit: Integer, null: Boolean, keeplast: Boolean],
            opt!(param!("condition", Expression)),
            ANY_OPTIONS,
        ]
    ),
    command!("tail", "tail [<int>]", opt!(param!("count", Integer))),
    command!("reverse", "reverse", NO_ARGS),
    command!("uniq", "uniq", NO_ARGS),
    command!(
        "top",
        "top [<int>] [limit=<int>] <field-list> [BY <field-list>]",
        TOP
    ),
    command!(
        "rare",
        "rare [<int>] [limit=<int>] <field-list> [BY <field-list>]",
        TOP
    ),
    command!(
        "return",
        "return [<int>] [<alias>=<field>|<field>]...",
        seq![
            opt!(param!("count", Integer)),
            repeat!(
                choice![
                    seq![param!("alias", Name), kw!("="), param!("field", Field)],
                    param!("field", Field),
                ],
                0
            ),
        ]
    ),
    command!(
        "join",
        "join [type=inner|left|outer] [<field-list>] [ <subsearch> ]",
        seq![
            options![
                type: Name,
                usetime: Boolean,
                earlier: Boolean,
                overwrite: Boolean,
                max: Integer,
            ],
            opt!(param!("fields", FieldList)),
            ANY_OPTIONS,
            param!("subsearch", Subsearch),
        ]
    ),
    command!("append", "append [ <subsearch> ]", APPEND),
    command!("appendcols", "appendcols [override=<bool>] [ <subsearch> ]", APPEND),
    command!("appendpipe", "appendpipe [ <subpipeline> ]", APPEND),
    command!(
        "union",
        "union [<dataset>|[ <subsearch> ]]...",
        seq![
            options![maxtime: Integer, maxout: Integer, timeout: Integer],
            repeat!(
                choice![param!("subsearch", Subsearch), param!("dataset", Name)],
                1
            ),
        ]
    ),
    command!(
        "multisearch",
        "multisearch [ <subsearch> ] [ <subsearch> ]...",
        repeat!(param!("subsearch", Subsearch), 1)
    ),
    command!(
        "foreach",
        "foreach <field-list> [fieldstr=<str>] [ <subsearch-template> ]",
        seq![
            repeat!(
                choice![
                    param!("fields", FieldList),
                    options![
                        fieldstr: String,
                        matchstr: String,
                        matchseg1: String,
                        matchseg2: String,
                        matchseg3: String,
                    ],
                ],
                1
            ),
            param!("template", Subsearch),
        ]
    ),
    command!(
        "map",
        "map (search=\"<search>\" | <savedsearch> | [ <subsearch> ]) [maxsearches=<int>]",
        seq![
            options![search: String, maxsearches: Integer],
            opt!(choice![
                param!("subsearch", Subsearch),
                param!("savedsearch", Name),
            ]),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "bin",
        ["bucket"],
        "bin [span=<time>] [bins=<int>] <field> [AS <alias>]",
        seq![
            options![
                span: TimeSpan,
                bins: Integer,
                minspan: TimeSpan,
                start: Number,
                end: Number,
                aligntime: TimeSpan,
            ],
            param!("field", Field, Modifies),
            ANY_OPTIONS,
            opt!(ALIAS),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "fillnull",
        "fillnull [value=<string>] [<field-list>]",
        seq![
            options![value: Any],
            opt!(param!("fields", FieldList, Modifies)),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "filldown",
        "filldown [<field-list>]",
        opt!(param!("fields", FieldList, Modifies))
    ),
    command!(
        "transaction",
        "transaction [<field-list>] [maxspan=<time>] [maxpause=<time>] [startswith=<filter>] [endswith=<filter>]",
        repeat!(
            choice![
                param!("fields", FieldList),
                options![
                    maxspan: TimeSpan,
                    maxpause: TimeSpan,
                    maxevents: Integer,
                    startswith: Any,
                    endswith: Any,
                    keepevicted: Boolean,
                    mvlist: Boolean,
                    delim: String,
                    connected: Boolean,
                    unifyends: Boolean,
                    keeporphans: Boolean,
                ],
            ],
            0
        )
    ),
    command!(
        "spath",
        "spath [input=<field>] [output=<field>] [path=<path> | <path>]",
        seq![
            options![input: Field, output: Field, path: Any],
            opt!(param!("path", Any)),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "makemv",
        "makemv [delim=<string>|tokenizer=<string>] [allowempty=<bool>] <field>",
        seq![
            options![
                delim: String,
                tokenizer: String,
                allowempty: Boolean,
                setsv: Boolean,
            ],
            param!("field", Field, Modifies),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "mvexpand",
        "mvexpand <field> [limit=<int>]",
        seq![
            ANY_OPTIONS,
            param!("field", Field, Modifies),
            options![limit: Integer],
        ]
    ),
    command!(
        "mvcombine",
        "mvcombine [delim=<string>] <field>",
        seq![
            options![delim: String],
            param!("field", Field, Modifies),
            ANY_OPTIONS,
        ]
    ),
    command!("nomv", "nomv <field>", param!("field", Field, Modifies)),
    command!(
        "convert",
        "convert [timeformat=<string>] <function>(<field>) [AS <alias>]...",
        seq![
            options![timeformat: String],
            repeat!(choice![FIELD_CALL, ANY_OPTIONS], 1),
        ]
    ),
    command!(
        "makeresults",
        "makeresults [count=<int>] [annotate=<bool>]",
        options![
            count: Integer,
            annotate: Boolean,
            splunk_server: Name,
            splunk_server_group: Name,
        ]
    ),
    command!("addinfo", "addinfo", NO_ARGS),
    command!(
        "gentimes",
        "gentimes start=<time> [end=<time>] [increment=<time>]",
        options![start: Any, end: Any, increment: TimeSpan]
    ),
    command!(
        "strcat",
        "strcat [allrequired=<bool>] <source>... <dest-field>",
        seq![
            options![allrequired: Boolean],
            repeat!(
                choice![param!("source", String), param!("source", Field)],
                1
            ),
            param!("destination", Field, Creates),
        ]
    ),
    command!(
        "accum",
        "accum <field> [AS <alias>]",
        seq![param!("field", Field, Modifies), opt!(ALIAS)]
    ),
    command!(
        "delta",
        "delta <field> [AS <alias>] [p=<int>]",
        seq![
            options![p: Integer],
            param!("field", Field),
            ANY_OPTIONS,
            opt!(ALIAS),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "autoregress",
        "autoregress <field> [AS <alias>] [p=<int>[-<int>]]",
        seq![
            options![p: Any],
            param!("field", Field),
            ANY_OPTIONS,
            opt!(ALIAS),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "addtotals",
        "addtotals [row=<bool>] [col=<bool>] [fieldname=<field>] [<field-list>]",
        repeat!(
            choice![
                param!("fields", FieldList),
                options![
                    row: Boolean,
                    col: Boolean,
                    labelfield: Field,
                    label: String,
                    fieldname: Field,
                ],
            ],
            0
        )
    ),
    command!(
        "rangemap",
        "rangemap field=<field> <name>=<range>... [default=<name>]",
        options![field: Field, default: Name]
    ),
    command!(
        "replace",
        "replace <value> WITH <value> [, <value> WITH <value>]... [IN <field-list>]",
        seq![
            repeat!(
                seq![param!("from", Any), kw!("with"), param!("to", Any)],
                1
            ),
            opt!(seq![kw!("in"), param!("fields", FieldList, Modifies)]),
        ]
    ),
    command!(
        "xyseries",
        "xyseries <x-field> <y-field> <data-field>...",
        seq![
            options![grouped: Boolean, sep: String, format: String],
            param!("x_field", Field),
            param!("y_field", Field),
            param!("data_fields", FieldList),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "untable",
        "untable <x-field> <y-name-field> <y-data-field>",
        seq![
            param!("x_field", Field),
            param!("y_field", Field, Creates),
            param!("data_field", Field, Creates),
        ]
    ),
    command!(
        "transpose",
        "transpose [<int>] [column_name=<string>] [header_field=<field>]",
        seq![
            ANY_OPTIONS,
            opt!(param!("count", Integer)),
            options![
                column_name: String,
                header_field: Field,
                include_empty: Boolean,
            ],
        ]
    ),
    command!(
        "iplocation",
        "iplocation [prefix=<string>] [allfields=<bool>] <ip-field>",
        seq![
            options![prefix: String, allfields: Boolean, lang: Name],
            param!("field", Field),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "extract",
        ["kv"],
        "extract [pairdelim=<string>] [kvdelim=<string>] [<extractor>...]",
        seq![
            options![
                pairdelim: String,
                kvdelim: String,
                auto: Boolean,
                clean_keys: Boolean,
                limit: Integer,
                maxchars: Integer,
                mv_add: Boolean,
                reload: Boolean,
                segment: Boolean,
            ],
            repeat!(param!("extractor", Name), 0),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "trendline",
        "trendline <trend><period>(<field>) [AS <alias>]...",
        repeat!(FIELD_CALL, 1)
    ),
    command!(
        "predict",
        "predict <field> [AS <alias>]... [algorithm=<name>] [future_timespan=<int>]",
        repeat!(
            choice![
                seq![param!("field", Field), opt!(ALIAS)],
                options![
                    algorithm: Name,
                    future_timespan: Integer,
                    holdback: Integer,
                    period: Integer,
                    correlate: Field,
                ],
            ],
            1
        )
    ),
    command!(
        "fieldsummary",
        "fieldsummary [maxvals=<int>] [<field-list>]",
        seq![options![maxvals: Integer], opt!(param!("fields", FieldList))]
    ),
    command!(
        "rest",
        "rest <endpoint> [count=<int>] [splunk_server=<name>]",
        seq![
            param!("endpoint", Any),
            options![count: Integer, splunk_server: Name, timeout: Integer],
        ]
    ),
    command!(
        "metadata",
        "metadata type=<hosts|sources|sourcetypes> [index=<name>]",
        options![type: Name, index: Name, splunk_server: Name]
    ),
    command!(
        "datamodel",
        "datamodel [<model> [<dataset> [<search-mode>]]]",
        seq![
            opt!(param!("model", Name)),
            opt!(param!("dataset", Name)),
            opt!(param!("mode", Name)),
            ANY_OPTIONS,
        ]
    ),
    command!(
        "loadjob",
        "loadjob <sid> | savedsearch=<user:app:search>",
        seq![
            ANY_OPTIONS,
            opt!(param!("job", Any)),
            options![
                savedsearch: String,
                events: Boolean,
                artifact_offset: Integer,
                ignore_running: Boolean,
            ],
        ]
    ),
    command!(
        "savedsearch",
        "savedsearch <name> [<key>=<value>]...",
        seq![param!("name", Any), ANY_OPTIONS]
    ),
    command!(
        "collect",
        "collect index=<name> [sourcetype=<name>] [marker=<string>]",
        options![
            index: Name,
            source: String,
            sourcetype: Name,
            marker: String,
            addtime: Boolean,
            spool: Boolean,
            testmode: Boolean,
        ]
    ),
    command!(
        "fit",
        "fit <algorithm> [<target>] [FROM <field-list>] [INTO <model>] [AS <alias>]",
        seq![
            param!("algorithm", Name),
            repeat!(
                choice![
                    param!("fields", FieldList),
                    seq![kw!("from"), param!("features", FieldList)],
                    seq![kw!("into"), param!("model", Name)],
                    ALIAS,
                    ANY_OPTIONS,
                ],
                0
            ),
        ]
    ),
    command!(
        "apply",
        "apply <model> [AS <alias>]",
        seq![param!("model", Name), opt!(ALIAS), ANY_OPTIONS]
    ),
];
