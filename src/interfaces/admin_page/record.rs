//! Records as they come off the wire
//!
//! The `/all` payload is read without a schema. Field values are stringified
//! the way a browser does when it concatenates them into markup, so a missing
//! field shows as `undefined` and a `null` one as `null`.

use serde_json::Value;

use super::RenderError;

/// The three fields a row needs, already in display form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields {
    pub id: String,
    pub small_url: String,
    pub origin_url: String,
}

impl RowFields {
    /// Read a row from one element of the payload
    ///
    /// A `null` element cannot be read and fails the render; any other
    /// non-object element yields `undefined` for every field.
    pub fn from_element(index: usize, element: Option<&Value>) -> Result<Self, RenderError> {
        match element {
            None | Some(Value::Null) => Err(RenderError::NullRecord { index }),
            Some(Value::Object(map)) => Ok(Self {
                id: js_display(map.get("id")),
                small_url: js_display(map.get("small_url")),
                origin_url: js_display(map.get("origin_url")),
            }),
            Some(_) => Ok(Self::undefined()),
        }
    }

    fn undefined() -> Self {
        Self {
            id: UNDEFINED.to_string(),
            small_url: UNDEFINED.to_string(),
            origin_url: UNDEFINED.to_string(),
        }
    }

    /// Markup for one row: edit form, delete form, open link
    pub fn to_row_html(&self, host: &str) -> String {
        let Self {
            id,
            small_url,
            origin_url,
        } = self;

        let field_len = 2 * id.len() + 2 * small_url.len() + origin_url.len() + 2 * host.len();
        let mut html = String::with_capacity(ROW_MARKUP_LEN + field_len);
        html.push_str("<div class=\"row\">");
        html.push_str("<form method=\"POST\" action=\"/edit\" id=\"form\">");
        html.push_str("<input type=\"hidden\" name=\"id\" value=\"");
        html.push_str(id);
        html.push_str("\">");
        html.push_str("<div class=\"input-field col s2\"><label>http://");
        html.push_str(host);
        html.push_str("/</label></div>");
        html.push_str("<div class=\"input-field col s3\">");
        html.push_str("<input type=\"text\" name=\"small_url\" value=\"");
        html.push_str(small_url);
        html.push_str("\">");
        html.push_str("</div><div class=\"input-field col s0.5\">=&gt;</div>");
        html.push_str("<div class=\"input-field col s3\">");
        html.push_str("<input type=\"text\" name=\"origin_url\" value=\"");
        html.push_str(origin_url);
        html.push_str("\"></div>");
        html.push_str("<div class=\"input-field col s1\"> ");
        html.push_str("<input type=\"submit\" name=\"save\" value=\"Save\" class=\"");
        html.push_str(BUTTON_CLASS);
        html.push_str("\">");
        html.push_str("</div></form>");
        html.push_str("<form method=\"POST\" action=\"/delete\" id=\"form\">");
        html.push_str("<div class=\"input-field col s1\">");
        html.push_str("<input type=\"hidden\" name=\"id\" value=\"");
        html.push_str(id);
        html.push_str("\">");
        html.push_str("<input type=\"submit\" class=\"");
        html.push_str(BUTTON_CLASS);
        html.push_str("\" value=\"X\"></div></form>");
        html.push_str("<a href=\"http://");
        html.push_str(host);
        html.push('/');
        html.push_str(small_url);
        html.push_str("\">Open</a></div>");
        html
    }
}

const UNDEFINED: &str = "undefined";

const BUTTON_CLASS: &str = "waves-effect waves-light btn";

// 固定标记部分的大致长度，用于预分配
const ROW_MARKUP_LEN: usize = 900;

/// Rows described by a parsed `/all` payload
#[derive(Debug)]
pub enum Payload<'a> {
    /// An array, or an object carrying a numeric `length`
    Indexed(IndexedPayload<'a>),
    /// A string: one row of `undefined` fields per UTF-16 code unit
    Text(usize),
    /// Anything without a length renders nothing
    Empty,
}

#[derive(Debug)]
pub enum IndexedPayload<'a> {
    Array(&'a [Value]),
    ArrayLike {
        map: &'a serde_json::Map<String, Value>,
        len: usize,
    },
}

impl<'a> Payload<'a> {
    pub fn classify(value: &'a Value) -> Result<Self, RenderError> {
        match value {
            Value::Null => Err(RenderError::NullPayload),
            Value::Array(items) => Ok(Payload::Indexed(IndexedPayload::Array(items))),
            Value::String(s) => Ok(Payload::Text(s.encode_utf16().count())),
            Value::Object(map) => match map.get("length") {
                Some(length) => Ok(Payload::Indexed(IndexedPayload::ArrayLike {
                    map,
                    len: array_like_length(length),
                })),
                None => Ok(Payload::Empty),
            },
            Value::Bool(_) | Value::Number(_) => Ok(Payload::Empty),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Payload::Indexed(IndexedPayload::Array(items)) => items.len(),
            Payload::Indexed(IndexedPayload::ArrayLike { len, .. }) => *len,
            Payload::Text(len) => *len,
            Payload::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fields of row `index`
    pub fn row(&self, index: usize) -> Result<RowFields, RenderError> {
        match self {
            Payload::Indexed(IndexedPayload::Array(items)) => {
                RowFields::from_element(index, items.get(index))
            }
            Payload::Indexed(IndexedPayload::ArrayLike { map, .. }) => {
                RowFields::from_element(index, map.get(&index.to_string()))
            }
            Payload::Text(_) => Ok(RowFields::undefined()),
            Payload::Empty => Err(RenderError::NullRecord { index }),
        }
    }
}

/// Loop bound for an object with a `length` key: the count of indices below it
fn array_like_length(length: &Value) -> usize {
    let n = js_to_number(length);
    if n.is_nan() || n <= 0.0 {
        return 0;
    }
    // 非整数长度向上取整：i < 2.5 时 i 取 0,1,2
    n.ceil().min(usize::MAX as f64) as usize
}

/// Numeric coercion used by `<` comparisons
pub fn js_to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => string_to_number(s),
        Value::Array(_) => string_to_number(&js_display(Some(value))),
        Value::Object(_) => f64::NAN,
    }
}

fn string_to_number(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = text
            .strip_prefix(prefix)
            .or_else(|| text.strip_prefix(&prefix.to_uppercase()))
        {
            return u64::from_str_radix(digits, radix).map_or(f64::NAN, |v| v as f64);
        }
    }

    let unsigned = text.trim_start_matches(['+', '-']);
    if unsigned == "Infinity" {
        return if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    // Rust 接受 "inf"/"nan"，这里只认十进制数字形式
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    text.parse().unwrap_or(f64::NAN)
}

/// Stringify a JSON value as string concatenation would
pub fn js_display(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED.to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_display(n),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_display(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// 2^53，超过后整数按双精度舍入显示
const MAX_SAFE_INTEGER: u64 = 9_007_199_254_740_992;

fn number_display(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64()
        && i.unsigned_abs() <= MAX_SAFE_INTEGER
    {
        return i.to_string();
    }
    if let Some(u) = n.as_u64()
        && u <= MAX_SAFE_INTEGER
    {
        return u.to_string();
    }
    let Some(f) = n.as_f64() else {
        return n.to_string();
    };

    let magnitude = f.abs();
    if f == 0.0 {
        "0".to_string()
    } else if magnitude >= 1e21 || magnitude < 1e-6 {
        // 指数形式：1e+21, 1.5e-7
        let formatted = format!("{:e}", f);
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        }
    } else {
        format!("{}", f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_js_display_scalars() {
        assert_eq!(js_display(None), "undefined");
        assert_eq!(js_display(Some(&json!(null))), "null");
        assert_eq!(js_display(Some(&json!(true))), "true");
        assert_eq!(js_display(Some(&json!(42))), "42");
        assert_eq!(js_display(Some(&json!(-7))), "-7");
        assert_eq!(js_display(Some(&json!(2.0))), "2");
        assert_eq!(js_display(Some(&json!(2.5))), "2.5");
        assert_eq!(js_display(Some(&json!(1e21))), "1e+21");
        assert_eq!(js_display(Some(&json!(0.0000001))), "1e-7");
        assert_eq!(js_display(Some(&json!("abc"))), "abc");
    }

    #[test]
    fn test_js_display_compound() {
        assert_eq!(js_display(Some(&json!([1, "a", null, [2, 3]]))), "1,a,,2,3");
        assert_eq!(js_display(Some(&json!({"a": 1}))), "[object Object]");
        assert_eq!(js_display(Some(&json!([]))), "");
    }

    #[test]
    fn test_row_fields_from_object() {
        let element = json!({"id": 7, "small_url": "abc", "origin_url": "https://x.io"});
        let fields = RowFields::from_element(0, Some(&element)).unwrap();
        assert_eq!(fields.id, "7");
        assert_eq!(fields.small_url, "abc");
        assert_eq!(fields.origin_url, "https://x.io");
    }

    #[test]
    fn test_row_fields_missing_and_non_object() {
        let fields = RowFields::from_element(0, Some(&json!({"id": "x"}))).unwrap();
        assert_eq!(fields.small_url, "undefined");
        assert_eq!(fields.origin_url, "undefined");

        let fields = RowFields::from_element(0, Some(&json!(5))).unwrap();
        assert_eq!(fields.id, "undefined");

        assert!(matches!(
            RowFields::from_element(3, Some(&json!(null))),
            Err(RenderError::NullRecord { index: 3 })
        ));
    }

    #[test]
    fn test_row_html_matches_markup() {
        let fields = RowFields {
            id: "1".to_string(),
            small_url: "abc".to_string(),
            origin_url: "https://example.org".to_string(),
        };
        let expected = concat!(
            "<div class=\"row\">",
            "<form method=\"POST\" action=\"/edit\" id=\"form\">",
            "<input type=\"hidden\" name=\"id\" value=\"1\">",
            "<div class=\"input-field col s2\"><label>http://example.com/</label></div>",
            "<div class=\"input-field col s3\">",
            "<input type=\"text\" name=\"small_url\" value=\"abc\">",
            "</div><div class=\"input-field col s0.5\">=&gt;</div>",
            "<div class=\"input-field col s3\">",
            "<input type=\"text\" name=\"origin_url\" value=\"https://example.org\"></div>",
            "<div class=\"input-field col s1\"> ",
            "<input type=\"submit\" name=\"save\" value=\"Save\" ",
            "class=\"waves-effect waves-light btn\">",
            "</div></form>",
            "<form method=\"POST\" action=\"/delete\" id=\"form\">",
            "<div class=\"input-field col s1\">",
            "<input type=\"hidden\" name=\"id\" value=\"1\">",
            "<input type=\"submit\" class=\"waves-effect waves-light btn\" ",
            "value=\"X\"></div></form>",
            "<a href=\"http://example.com/abc\">Open</a></div>",
        );
        assert_eq!(fields.to_row_html("example.com"), expected);
    }

    #[test]
    fn test_payload_classification() {
        let array = json!([{}, {}]);
        assert_eq!(Payload::classify(&array).unwrap().len(), 2);

        let text = json!("héllo😀");
        assert_eq!(Payload::classify(&text).unwrap().len(), 7);

        assert!(Payload::classify(&json!(12)).unwrap().is_empty());
        assert!(Payload::classify(&json!({"id": 1})).unwrap().is_empty());
        assert!(matches!(
            Payload::classify(&json!(null)),
            Err(RenderError::NullPayload)
        ));
    }

    #[test]
    fn test_js_display_large_integers_round_like_doubles() {
        assert_eq!(js_display(Some(&json!(9007199254740992u64))), "9007199254740992");
        assert_eq!(js_display(Some(&json!(9007199254740993u64))), "9007199254740992");
        assert_eq!(js_display(Some(&json!(u64::MAX))), "18446744073709552000");
        assert_eq!(js_display(Some(&json!(i64::MIN))), "-9223372036854776000");
    }

    #[test]
    fn test_js_to_number() {
        assert_eq!(js_to_number(&json!("2")), 2.0);
        assert_eq!(js_to_number(&json!(" 0x10 ")), 16.0);
        assert_eq!(js_to_number(&json!("")), 0.0);
        assert_eq!(js_to_number(&json!(true)), 1.0);
        assert_eq!(js_to_number(&json!(null)), 0.0);
        assert_eq!(js_to_number(&json!(["3"])), 3.0);
        assert!(js_to_number(&json!("inf")).is_nan());
        assert!(js_to_number(&json!("2px")).is_nan());
        assert!(js_to_number(&json!({})).is_nan());
        assert_eq!(js_to_number(&json!("-Infinity")), f64::NEG_INFINITY);
    }

    #[test]
    fn test_array_like_length_is_coerced() {
        let value = json!({"length": "2", "0": {"id": 1}, "1": {"id": 2}});
        assert_eq!(Payload::classify(&value).unwrap().len(), 2);

        let value = json!({"length": true, "0": {"id": 1}});
        let payload = Payload::classify(&value).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.row(0).unwrap().id, "1");

        assert!(Payload::classify(&json!({"length": "abc"})).unwrap().is_empty());
        assert!(Payload::classify(&json!({"length": {}})).unwrap().is_empty());
    }

    #[test]
    fn test_array_like_object() {
        let value = json!({"length": 2, "0": {"id": 1, "small_url": "a", "origin_url": "b"}});
        let payload = Payload::classify(&value).unwrap();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload.row(0).unwrap().small_url, "a");
        assert!(matches!(
            payload.row(1),
            Err(RenderError::NullRecord { index: 1 })
        ));
    }
}
