use crate::FunctionCategory::{self, *};
use crate::FunctionContext::{self, Both, Eval, Stats};
use crate::ReturnType::{self, Any, Boolean, Json as JsonValue, Multivalue as Mv, Number, String as Str};
use crate::{FunctionInfo, FunctionParam};

const fn req(name: &'static str) -> FunctionParam {
    FunctionParam {
        name,
        optional: false,
        variadic: false,
    }
}

const fn opt(name: &'static str) -> FunctionParam {
    FunctionParam {
        name,
        optional: true,
        variadic: false,
    }
}

const fn rest(name: &'static str) -> FunctionParam {
    FunctionParam {
        name,
        optional: true,
        variadic: true,
    }
}

const fn func(
    name: &'static str,
    category: FunctionCategory,
    return_type: ReturnType,
    context: FunctionContext,
    params: &'static [FunctionParam],
    description: &'static str,
) -> FunctionInfo {
    FunctionInfo {
        name,
        category,
        return_type,
        params,
        context,
        description,
    }
}

const X: &[FunctionParam] = &[req("x")];
const FIELD: &[FunctionParam] = &[req("field")];
const OPT_FIELD: &[FunctionParam] = &[opt("field")];
const VALUES: &[FunctionParam] = &[req("x"), rest("more")];

pub static FUNCTIONS: &[FunctionInfo] = &[
    // Aggregations
    func("count", Aggregate, Number, Stats, OPT_FIELD, "Number of occurrences"),
    func("c", Aggregate, Number, Stats, OPT_FIELD, "Shorthand for count"),
    func("dc", Aggregate, Number, Stats, FIELD, "Distinct count"),
    func("distinct_count", Aggregate, Number, Stats, FIELD, "Distinct count"),
    func("estdc", Aggregate, Number, Stats, FIELD, "Estimated distinct count"),
    func("estdc_error", Aggregate, Number, Stats, FIELD, "Distinct count error estimate"),
    func("sum", Aggregate, Number, Stats, FIELD, "Sum of values"),
    func("sumsq", Aggregate, Number, Stats, FIELD, "Sum of squares"),
    func("avg", Aggregate, Number, Stats, FIELD, "Arithmetic mean"),
    func("mean", Aggregate, Number, Stats, FIELD, "Arithmetic mean"),
    func("median", Aggregate, Number, Stats, FIELD, "Middle value"),
    func("mode", Aggregate, Any, Stats, FIELD, "Most frequent value"),
    func("max", Statistical, Any, Both, VALUES, "Largest value"),
    func("min", Statistical, Any, Both, VALUES, "Smallest value"),
    func("range", Aggregate, Number, Stats, FIELD, "Difference between max and min"),
    func("stdev", Aggregate, Number, Stats, FIELD, "Sample standard deviation"),
    func("stdevp", Aggregate, Number, Stats, FIELD, "Population standard deviation"),
    func("var", Aggregate, Number, Stats, FIELD, "Sample variance"),
    func("varp", Aggregate, Number, Stats, FIELD, "Population variance"),
    func("perc", Aggregate, Number, Stats, FIELD, "Percentile, written pNN or percNN"),
    func("exactperc", Aggregate, Number, Stats, FIELD, "Exact percentile"),
    func("upperperc", Aggregate, Number, Stats, FIELD, "Upper bound percentile"),
    func("values", Aggregate, Mv, Stats, FIELD, "Distinct values, sorted"),
    func("list", Aggregate, Mv, Stats, FIELD, "All values in order"),
    func("sparkline", Aggregate, Any, Stats, &[req("aggregation"), opt("span")], "Inline trend chart"),
    func("per_second", Aggregate, Number, Stats, FIELD, "Rate per second"),
    func("per_minute", Aggregate, Number, Stats, FIELD, "Rate per minute"),
    func("per_hour", Aggregate, Number, Stats, FIELD, "Rate per hour"),
    func("per_day", Aggregate, Number, Stats, FIELD, "Rate per day"),
    func("rate", Aggregate, Number, Stats, FIELD, "Per-second rate of a counter"),
    // Event order
    func("first", EventOrder, Any, Stats, FIELD, "First seen value"),
    func("last", EventOrder, Any, Stats, FIELD, "Last seen value"),
    func("earliest", EventOrder, Any, Stats, FIELD, "Chronologically earliest value"),
    func("latest", EventOrder, Any, Stats, FIELD, "Chronologically latest value"),
    func("earliest_time", EventOrder, Number, Stats, FIELD, "Time of the earliest value"),
    func("latest_time", EventOrder, Number, Stats, FIELD, "Time of the latest value"),
    // Comparison and conditional
    func("if", Comparison, Any, Eval, &[req("condition"), req("then"), req("else")], "Conditional value"),
    func("case", Comparison, Any, Eval, &[req("condition"), req("value"), rest("more")], "First value whose condition holds"),
    func("coalesce", Comparison, Any, Eval, VALUES, "First non-null argument"),
    func("nullif", Comparison, Any, Eval, &[req("x"), req("y")], "Null when both arguments are equal"),
    func("validate", Comparison, Any, Eval, &[req("condition"), req("value"), rest("more")], "First value whose condition fails"),
    func("like", Comparison, Boolean, Eval, &[req("text"), req("pattern")], "SQL LIKE match"),
    func("match", Comparison, Boolean, Eval, &[req("text"), req("regex")], "Regular expression match"),
    func("searchmatch", Comparison, Boolean, Eval, &[req("search")], "Event matches a search string"),
    func("cidrmatch", Comparison, Boolean, Eval, &[req("cidr"), req("ip")], "IP address within subnet"),
    func("in", Comparison, Boolean, Eval, &[req("field"), req("value"), rest("more")], "Value is one of the list"),
    func("true", Comparison, Boolean, Eval, &[], "Boolean true"),
    func("false", Comparison, Boolean, Eval, &[], "Boolean false"),
    func("null", Comparison, Any, Eval, &[], "Null value"),
    // Conversion
    func("tonumber", Conversion, Number, Eval, &[req("text"), opt("base")], "Parse a number"),
    func("tostring", Conversion, Str, Eval, &[req("x"), opt("format")], "Format as a string"),
    func("printf", Conversion, Str, Eval, &[req("format"), rest("args")], "Formatted string"),
    func("ipmask", Conversion, Str, Eval, &[req("mask"), req("ip")], "Mask an IP address"),
    func("auto", Conversion, Any, Eval, FIELD, "Automatic numeric conversion"),
    func("num", Conversion, Number, Eval, FIELD, "Numeric conversion"),
    func("dur2sec", Conversion, Number, Eval, FIELD, "Duration to seconds"),
    func("mktime", Conversion, Number, Eval, FIELD, "Human time to epoch"),
    func("ctime", Conversion, Str, Eval, FIELD, "Epoch to human time"),
    func("memk", Conversion, Number, Eval, FIELD, "Memory size to kilobytes"),
    func("rmcomma", Conversion, Number, Eval, FIELD, "Remove commas from numbers"),
    func("rmunit", Conversion, Number, Eval, FIELD, "Remove units from numbers"),
    func("none", Conversion, Any, Eval, FIELD, "Exclude fields from conversion"),
    // Cryptographic
    func("md5", Cryptographic, Str, Eval, X, "MD5 digest"),
    func("sha1", Cryptographic, Str, Eval, X, "SHA-1 digest"),
    func("sha256", Cryptographic, Str, Eval, X, "SHA-256 digest"),
    func("sha512", Cryptographic, Str, Eval, X, "SHA-512 digest"),
    // Date and time
    func("now", DateTime, Number, Eval, &[], "Search start time"),
    func("time", DateTime, Number, Eval, &[], "Wall clock time"),
    func("relative_time", DateTime, Number, Eval, &[req("time"), req("modifier")], "Apply a time modifier"),
    func("strftime", DateTime, Str, Eval, &[req("time"), req("format")], "Format a timestamp"),
    func("strptime", DateTime, Number, Eval, &[req("text"), req("format")], "Parse a timestamp"),
    // Informational
    func("isbool", Informational, Boolean, Eval, X, "Value is boolean"),
    func("isint", Informational, Boolean, Eval, X, "Value is an integer"),
    func("isnum", Informational, Boolean, Eval, X, "Value is numeric"),
    func("isstr", Informational, Boolean, Eval, X, "Value is a string"),
    func("isnull", Informational, Boolean, Eval, X, "Value is null"),
    func("isnotnull", Informational, Boolean, Eval, X, "Value is not null"),
    func("typeof", Informational, Str, Eval, X, "Type name of a value"),
    // JSON
    func("json_object", Json, JsonValue, Eval, &[rest("pairs")], "Build a JSON object"),
    func("json_array", Json, JsonValue, Eval, &[rest("values")], "Build a JSON array"),
    func("json_extract", Json, Any, Eval, &[req("json"), rest("paths")], "Values at JSON paths"),
    func("json_keys", Json, JsonValue, Eval, &[req("json")], "Keys of a JSON object"),
    func("json_set", Json, JsonValue, Eval, &[req("json"), req("path"), req("value"), rest("more")], "Set values in a JSON object"),
    func("json_valid", Json, Boolean, Eval, &[req("json")], "Text is valid JSON"),
    // Math
    func("abs", Math, Number, Eval, X, "Absolute value"),
    func("ceiling", Math, Number, Eval, X, "Round up"),
    func("ceil", Math, Number, Eval, X, "Round up"),
    func("floor", Math, Number, Eval, X, "Round down"),
    func("round", Math, Number, Eval, &[req("x"), opt("digits")], "Round to digits"),
    func("sigfig", Math, Number, Eval, X, "Round to significant figures"),
    func("exact", Math, Number, Eval, X, "Full precision arithmetic"),
    func("exp", Math, Number, Eval, X, "e raised to x"),
    func("ln", Math, Number, Eval, X, "Natural logarithm"),
    func("log", Math, Number, Eval, &[req("x"), opt("base")], "Logarithm"),
    func("pow", Math, Number, Eval, &[req("x"), req("y")], "x raised to y"),
    func("sqrt", Math, Number, Eval, X, "Square root"),
    func("pi", Math, Number, Eval, &[], "The constant pi"),
    func("random", Math, Number, Eval, &[], "Pseudo-random integer"),
    // Multivalue
    func("mvappend", Multivalue, Mv, Eval, VALUES, "Concatenate values into a multivalue"),
    func("mvcount", Multivalue, Number, Eval, FIELD, "Number of values"),
    func("mvdedup", Multivalue, Mv, Eval, FIELD, "Remove duplicate values"),
    func("mvfilter", Multivalue, Mv, Eval, &[req("predicate")], "Values matching a predicate"),
    func("mvfind", Multivalue, Number, Eval, &[req("field"), req("regex")], "Index of the first match"),
    func("mvindex", Multivalue, Any, Eval, &[req("field"), req("start"), opt("end")], "Values by index"),
    func("mvjoin", Multivalue, Str, Eval, &[req("field"), req("delimiter")], "Join values with a delimiter"),
    func("mvmap", Multivalue, Mv, Eval, &[req("field"), req("expression")], "Map an expression over values"),
    func("mvrange", Multivalue, Mv, Eval, &[req("start"), req("end"), opt("step")], "Numeric range"),
    func("mvsort", Multivalue, Mv, Eval, FIELD, "Sort values lexicographically"),
    func("mvzip", Multivalue, Mv, Eval, &[req("x"), req("y"), opt("delimiter")], "Pairwise join of two multivalues"),
    func("split", Multivalue, Mv, Eval, &[req("text"), req("delimiter")], "Split text into values"),
    func("commands", Multivalue, Mv, Eval, &[req("search")], "Commands used in a search string"),
    // Text
    func("len", Text, Number, Eval, X, "Character count"),
    func("lower", Text, Str, Eval, X, "Lowercase"),
    func("upper", Text, Str, Eval, X, "Uppercase"),
    func("ltrim", Text, Str, Eval, &[req("text"), opt("chars")], "Trim from the left"),
    func("rtrim", Text, Str, Eval, &[req("text"), opt("chars")], "Trim from the right"),
    func("trim", Text, Str, Eval, &[req("text"), opt("chars")], "Trim both ends"),
    func("replace", Text, Str, Eval, &[req("text"), req("regex"), req("replacement")], "Regex substitution"),
    func("substr", Text, Str, Eval, &[req("text"), req("start"), opt("length")], "Substring"),
    func("spath", Text, Any, Eval, &[req("json"), req("path")], "Value at a JSON or XML path"),
    func("urldecode", Text, Str, Eval, X, "Decode a URL"),
    // Trigonometry
    func("acos", Trigonometry, Number, Eval, X, "Arc cosine"),
    func("acosh", Trigonometry, Number, Eval, X, "Hyperbolic arc cosine"),
    func("asin", Trigonometry, Number, Eval, X, "Arc sine"),
    func("asinh", Trigonometry, Number, Eval, X, "Hyperbolic arc sine"),
    func("atan", Trigonometry, Number, Eval, X, "Arc tangent"),
    func("atan2", Trigonometry, Number, Eval, &[req("y"), req("x")], "Two-argument arc tangent"),
    func("atanh", Trigonometry, Number, Eval, X, "Hyperbolic arc tangent"),
    func("cos", Trigonometry, Number, Eval, X, "Cosine"),
    func("cosh", Trigonometry, Number, Eval, X, "Hyperbolic cosine"),
    func("hypot", Trigonometry, Number, Eval, &[req("x"), req("y")], "Hypotenuse"),
    func("sin", Trigonometry, Number, Eval, X, "Sine"),
    func("sinh", Trigonometry, Number, Eval, X, "Hyperbolic sine"),
    func("tan", Trigonometry, Number, Eval, X, "Tangent"),
    func("tanh", Trigonometry, Number, Eval, X, "Hyperbolic tangent"),
];
