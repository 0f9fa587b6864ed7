use crate::CommandCategory::*;
use crate::PerformanceRisk::{self, High, Medium};
use crate::{CommandCategory, CommandInfo, FieldEffects};

const PASSES: FieldEffects = FieldEffects {
    creates: false,
    modifies: false,
    drops: false,
    preserves_others: true,
};

const CREATES: FieldEffects = FieldEffects {
    creates: true,
    ..PASSES
};

const MODIFIES: FieldEffects = FieldEffects {
    modifies: true,
    ..PASSES
};

const CREATES_MODIFIES: FieldEffects = FieldEffects {
    creates: true,
    modifies: true,
    ..PASSES
};

/// Keeps only the fields it names.
const SELECTS: FieldEffects = FieldEffects {
    drops: true,
    preserves_others: false,
    ..PASSES
};

/// Replaces the field set with its own output.
const REPLACES: FieldEffects = FieldEffects {
    creates: true,
    modifies: false,
    drops: true,
    preserves_others: false,
};

const fn command(
    name: &'static str,
    category: CommandCategory,
    description: &'static str,
) -> CommandInfo {
    CommandInfo {
        name,
        aliases: &[],
        category,
        description,
        effects: PASSES,
        implicit_fields: &[],
        risk: PerformanceRisk::None,
        risk_note: None,
        generating: false,
        streaming: true,
    }
}

impl CommandInfo {
    const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    const fn effects(mut self, effects: FieldEffects) -> Self {
        self.effects = effects;
        self
    }

    const fn implicit(mut self, fields: &'static [&'static str]) -> Self {
        self.implicit_fields = fields;
        self
    }

    const fn risk(mut self, risk: PerformanceRisk, note: &'static str) -> Self {
        self.risk = risk;
        self.risk_note = Some(note);
        self
    }

    const fn low_risk(mut self) -> Self {
        self.risk = PerformanceRisk::Low;
        self
    }

    const fn generating(mut self) -> Self {
        self.generating = true;
        self.streaming = false;
        self
    }

    const fn transforming(mut self) -> Self {
        self.streaming = false;
        self
    }
}

pub static COMMANDS: &[CommandInfo] = &[
    // Search and filtering
    command("search", Search, "Filter events with a search expression").low_risk(),
    command("where", Filtering, "Keep events whose eval expression is true"),
    command("regex", Filtering, "Keep or discard events matching a regular expression")
        .risk(Medium, "regular expressions run against every event"),
    command("dedup", Filtering, "Remove events with duplicate field values").low_risk(),
    command("head", Filtering, "Keep the first N events"),
    command("tail", Filtering, "Keep the last N events").transforming(),
    command("uniq", Filtering, "Remove consecutive duplicate events"),
    // Field creation and modification
    command("eval", FieldCreation, "Compute fields from expressions").effects(CREATES_MODIFIES),
    command("fieldformat", Formatting, "Change how a field is displayed").effects(MODIFIES),
    command("rename", FieldManipulation, "Rename fields").effects(CREATES_MODIFIES),
    command("rex", Extraction, "Extract fields with named regex groups")
        .effects(CREATES_MODIFIES)
        .risk(Medium, "regular expressions run against every event"),
    command("spath", Extraction, "Extract fields from JSON or XML").effects(CREATES),
    command("extract", Extraction, "Extract key/value pairs from the raw event")
        .aliases(&["kv"])
        .effects(CREATES),
    command("xmlkv", Extraction, "Extract XML key/value pairs").effects(CREATES),
    command("kvform", Extraction, "Extract fields using form templates").effects(CREATES),
    command("iplocation", Extraction, "Add geographic fields for an IP address")
        .effects(CREATES)
        .implicit(&["City", "Country", "Region", "lat", "lon"]),
    command("bin", FieldManipulation, "Put continuous values into discrete buckets")
        .aliases(&["bucket"])
        .effects(MODIFIES),
    command("fillnull", FieldManipulation, "Replace null values").effects(CREATES_MODIFIES),
    command("filldown", FieldManipulation, "Replace nulls with the last non-null value")
        .effects(MODIFIES),
    command("convert", Formatting, "Convert field values with conversion functions")
        .effects(CREATES_MODIFIES),
    command("replace", FieldManipulation, "Replace field values").effects(MODIFIES),
    command("strcat", FieldCreation, "Concatenate values into a new field").effects(CREATES),
    command("accum", FieldCreation, "Running total of a numeric field").effects(CREATES_MODIFIES),
    command("delta", FieldCreation, "Difference between neighboring values").effects(CREATES),
    command("autoregress", FieldCreation, "Copy previous values into the current event")
        .effects(CREATES),
    command("addtotals", FieldCreation, "Sum numeric fields per event or per column")
        .effects(CREATES)
        .implicit(&["Total"]),
    command("rangemap", FieldCreation, "Classify a numeric field into named ranges")
        .effects(CREATES)
        .implicit(&["range"]),
    command("addinfo", FieldCreation, "Add search metadata fields")
        .effects(CREATES)
        .implicit(&["info_min_time", "info_max_time", "info_search_time", "info_sid"]),
    command("trendline", FieldCreation, "Moving averages of a field").effects(CREATES),
    command("setfields", FieldCreation, "Set field values to constants").effects(CREATES_MODIFIES),
    command("tags", FieldCreation, "Annotate events with tags").effects(CREATES),
    command("localize", FieldCreation, "Find time ranges with events")
        .effects(REPLACES)
        .transforming(),
    command("scrub", FieldManipulation, "Anonymize search results").effects(MODIFIES),
    command("highlight", Formatting, "Highlight terms in results"),
    command("abstract", Formatting, "Summarize each event's raw text").effects(MODIFIES),
    // Field filters
    command("table", FieldManipulation, "Keep the named fields as table columns")
        .effects(SELECTS)
        .transforming(),
    command("fields", FieldManipulation, "Keep or remove fields").effects(SELECTS),
    // Multivalue
    command("makemv", Multivalue, "Split a field into a multivalue field").effects(MODIFIES),
    command("mvexpand", Multivalue, "Expand a multivalue field into separate events")
        .effects(MODIFIES)
        .risk(Medium, "multiplies the number of events"),
    command("mvcombine", Multivalue, "Combine events that differ in one field")
        .effects(MODIFIES)
        .transforming(),
    command("nomv", Multivalue, "Turn a multivalue field into a single value").effects(MODIFIES),
    // Aggregation
    command("stats", Aggregation, "Aggregate events into statistics")
        .effects(REPLACES)
        .transforming(),
    command("eventstats", Aggregation, "Add aggregate statistics to every event")
        .effects(CREATES)
        .transforming()
        .risk(Medium, "holds the full result set in memory"),
    command("streamstats", Aggregation, "Running statistics in event order")
        .effects(CREATES)
        .low_risk(),
    command("chart", Aggregation, "Aggregate into a chart table")
        .effects(REPLACES)
        .transforming(),
    command("timechart", Aggregation, "Aggregate into a time series")
        .effects(REPLACES)
        .transforming()
        .implicit(&["_time"]),
    command("tstats", Aggregation, "Statistics over indexed fields")
        .effects(REPLACES)
        .generating(),
    command("mstats", Aggregation, "Statistics over metric indexes")
        .effects(REPLACES)
        .generating(),
    command("geostats", Aggregation, "Statistics clustered on a map grid")
        .effects(REPLACES)
        .transforming(),
    command("sistats", Aggregation, "Summary indexing version of stats")
        .effects(REPLACES)
        .transforming(),
    command("sichart", Aggregation, "Summary indexing version of chart")
        .effects(REPLACES)
        .transforming(),
    command("sitimechart", Aggregation, "Summary indexing version of timechart")
        .effects(REPLACES)
        .transforming(),
    command("sitop", Aggregation, "Summary indexing version of top")
        .effects(REPLACES)
        .transforming(),
    command("top", Aggregation, "Most common values of a field")
        .effects(REPLACES)
        .transforming()
        .implicit(&["count", "percent"]),
    command("rare", Aggregation, "Least common values of a field")
        .effects(REPLACES)
        .transforming()
        .implicit(&["count", "percent"]),
    command("transaction", Aggregation, "Group events into transactions")
        .effects(CREATES_MODIFIES)
        .transforming()
        .implicit(&["duration", "eventcount", "closed_txn", "field_match_sum", "linecount"])
        .risk(High, "keeps open transactions in memory"),
    command("fieldsummary", Aggregation, "Summary statistics for every field")
        .effects(REPLACES)
        .transforming()
        .implicit(&[
            "field",
            "count",
            "distinct_count",
            "is_exact",
            "max",
            "mean",
            "min",
            "numeric_count",
            "stdev",
            "values",
        ]),
    command("contingency", Aggregation, "Co-occurrence matrix of two fields")
        .effects(REPLACES)
        .transforming(),
    command("associate", Aggregation, "Find correlations between fields")
        .effects(REPLACES)
        .transforming(),
    command("correlate", Aggregation, "Co-occurrence of every field pair")
        .effects(REPLACES)
        .transforming(),
    // Reshaping
    command("xyseries", Formatting, "Convert results into a chart-ready table")
        .effects(REPLACES)
        .transforming(),
    command("untable", Formatting, "Convert a table into x/y/value rows")
        .effects(REPLACES)
        .transforming(),
    command("transpose", Formatting, "Swap rows and columns")
        .effects(REPLACES)
        .transforming()
        .implicit(&["column"]),
    // Ordering
    command("sort", Ordering, "Sort results by fields")
        .transforming()
        .risk(Medium, "needs the full result set"),
    command("reverse", Ordering, "Reverse result order")
        .transforming()
        .low_risk(),
    // Combining
    command("join", Combining, "Join results with a subsearch")
        .effects(CREATES_MODIFIES)
        .transforming()
        .risk(High, "subsearch results are limited and held in memory"),
    command("selfjoin", Combining, "Join results with themselves")
        .effects(CREATES_MODIFIES)
        .transforming()
        .risk(Medium, "compares every pair of events"),
    command("append", Combining, "Append subsearch results")
        .transforming()
        .risk(Medium, "subsearch runs to completion first"),
    command("appendcols", Combining, "Append subsearch columns")
        .effects(CREATES_MODIFIES)
        .transforming()
        .risk(Medium, "subsearch runs to completion first"),
    command("appendpipe", Combining, "Append results of a sub-pipeline")
        .transforming()
        .low_risk(),
    command("union", Combining, "Merge results from several datasets")
        .risk(Medium, "every dataset is searched"),
    command("multisearch", Combining, "Run streaming searches concurrently")
        .generating()
        .risk(Medium, "every subsearch is executed"),
    command("foreach", Combining, "Run a template pipeline for each matching field")
        .effects(CREATES_MODIFIES),
    command("map", Combining, "Run a search for every result")
        .generating()
        .risk(High, "launches one search per input row"),
    command("return", Combining, "Return values from a subsearch")
        .effects(REPLACES)
        .transforming(),
    command("format", Combining, "Turn results into a search string")
        .effects(REPLACES)
        .transforming(),
    // Lookups
    command("lookup", Lookup, "Enrich events from a lookup table").effects(CREATES_MODIFIES),
    command("inputlookup", Lookup, "Read a lookup table").generating(),
    command("outputlookup", Lookup, "Write results to a lookup table").transforming(),
    command("inputcsv", Lookup, "Read a CSV file").generating(),
    command("outputcsv", Output, "Write results to a CSV file").transforming(),
    // Generating
    command("makeresults", Generating, "Generate empty results")
        .effects(CREATES)
        .generating()
        .implicit(&["_time"]),
    command("gentimes", Generating, "Generate time range results")
        .effects(CREATES)
        .generating()
        .implicit(&["starttime", "endtime", "starthuman", "endhuman"]),
    command("rest", Generating, "Query a REST endpoint")
        .generating()
        .risk(Medium, "queries every search peer"),
    command("metadata", Generating, "List hosts, sources or sourcetypes")
        .generating()
        .low_risk(),
    command("datamodel", Generating, "Search a data model dataset")
        .generating()
        .risk(Medium, "expands to the dataset's full search"),
    command("loadjob", Generating, "Load results of a finished job").generating(),
    command("savedsearch", Generating, "Run a saved search")
        .generating()
        .risk(Medium, "runs another search inline"),
    command("eventcount", Generating, "Count events in indexes").generating(),
    command("dbinspect", Admin, "Inspect index buckets").generating(),
    command("history", Admin, "Search history of the current user").generating(),
    command("audit", Admin, "Audit trail events").generating(),
    command("typeahead", Admin, "Autocomplete suggestions").generating(),
    // Output
    command("collect", Output, "Write results to a summary index")
        .risk(Medium, "writes to an index"),
    command("mcollect", Output, "Write results to a metrics index")
        .risk(Medium, "writes to an index"),
    command("meventcollect", Output, "Write events to a metrics index")
        .risk(Medium, "writes to an index"),
    command("sendemail", Output, "Email search results").risk(Medium, "sends mail"),
    command("script", Output, "Run an external script").risk(High, "runs external code"),
    // Machine learning and analysis
    command("predict", MachineLearning, "Forecast time series values")
        .effects(CREATES)
        .transforming(),
    command("fit", MachineLearning, "Train a model")
        .effects(CREATES)
        .transforming()
        .risk(High, "model training is memory intensive"),
    command("apply", MachineLearning, "Apply a trained model").effects(CREATES),
    command("cluster", MachineLearning, "Group similar events")
        .effects(CREATES)
        .transforming()
        .implicit(&["cluster_count", "cluster_label"]),
    command("kmeans", MachineLearning, "K-means clustering")
        .effects(CREATES)
        .transforming()
        .implicit(&["CLUSTERNUM"]),
    command("anomalydetection", MachineLearning, "Find anomalous events")
        .effects(CREATES)
        .transforming(),
    command("diff", MachineLearning, "Compare two results line by line")
        .effects(REPLACES)
        .transforming(),
    // Admin
    command("addcoltotals", FieldCreation, "Append a column totals row")
        .effects(CREATES)
        .transforming(),
    command("delete", Admin, "Make events unsearchable")
        .risk(High, "irreversibly hides indexed data"),
];
