use crate::value::{JsonArray, JsonObject, JsonValue};

/// Renders values as compact JSON text with no inserted whitespace.
pub struct Printer {
    buf: String,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }
    fn print_string(&mut self, s: &str) {
        self.buf.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.buf.push_str("\\\""),
                '\\' => self.buf.push_str("\\\\"),
                '\u{8}' => self.buf.push_str("\\b"),
                '\u{c}' => self.buf.push_str("\\f"),
                '\n' => self.buf.push_str("\\n"),
                '\r' => self.buf.push_str("\\r"),
                '\t' => self.buf.push_str("\\t"),
                c if c < '\u{20}' => self.buf.push_str(&format!("\\u{:04x}", c as u32)),
                c => self.buf.push(c),
            }
        }
        self.buf.push('"');
    }
    fn print_number(&mut self, n: f64) {
        // NaN and infinities have no JSON spelling
        if n.is_finite() {
            self.buf.push_str(&n.to_string());
        } else {
            self.buf.push_str("null");
        }
    }
    fn print_object(&mut self, object: &JsonObject) {
        self.buf.push('{');
        for (i, (key, value)) in object.pairs().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            self.print_string(key);
            self.buf.push(':');
            self.print_value(value);
        }
        self.buf.push('}');
    }
    fn print_array(&mut self, array: &JsonArray) {
        self.buf.push('[');
        for (i, value) in array.iter().enumerate() {
            if i > 0 {
                self.buf.push(',');
            }
            self.print_value(value);
        }
        self.buf.push(']');
    }
    fn print_value(&mut self, v: &JsonValue) {
        match v {
            JsonValue::Null => self.buf.push_str("null"),
            JsonValue::Boolean(true) => self.buf.push_str("true"),
            JsonValue::Boolean(false) => self.buf.push_str("false"),
            JsonValue::Number(n) => self.print_number(*n),
            JsonValue::String(s) => self.print_string(s),
            JsonValue::Array(a) => self.print_array(a),
            JsonValue::Object(o) => self.print_object(o),
        }
    }
    pub fn print(mut self, v: &JsonValue) -> String {
        self.print_value(v);
        self.buf
    }
}

impl JsonValue {
    pub fn make_print_value(&self) -> String {
        Printer::new().print(self)
    }
}

impl JsonArray {
    pub fn make_print_value(&self) -> String {
        let mut p = Printer::new();
        p.print_array(self);
        p.buf
    }
}

impl JsonObject {
    pub fn make_print_value(&self) -> String {
        let mut p = Printer::new();
        p.print_object(self);
        p.buf
    }
}

impl std::fmt::Display for JsonValue {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.make_print_value())
    }
}

impl std::fmt::Display for JsonArray {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.make_print_value())
    }
}

impl std::fmt::Display for JsonObject {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.make_print_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(text: &str) -> String {
        JsonObject::parse(text).unwrap().make_print_value()
    }

    fn string(s: &str) -> JsonValue {
        JsonValue::String(s.to_string())
    }

    #[test]
    fn test_print_scalars() {
        #[rustfmt::skip]
        let tests = vec![
            (JsonValue::NULL, "null"),
            (JsonValue::Boolean(true), "true"),
            (JsonValue::Boolean(false), "false"),
            (JsonValue::Number(3.0), "3"),
            (JsonValue::Number(-123.45), "-123.45"),
            (JsonValue::Number(0.5), "0.5"),
            (JsonValue::Number(f64::NAN), "null"),
            (JsonValue::Number(f64::INFINITY), "null"),
            (string("abc"), r#""abc""#),
            (string("  a bc   def"), r#""  a bc   def""#),
        ];
        for (input, expected) in tests {
            assert_eq!(input.make_print_value(), String::from(expected));
        }
    }

    #[test]
    fn test_print_escapes() {
        #[rustfmt::skip]
        let tests = vec![
            ("say \"hi\"", r#""say \"hi\"""#),
            ("a\\b", r#""a\\b""#),
            ("line\nbreak\ttab\r", r#""line\nbreak\ttab\r""#),
            ("\u{8}\u{c}", r#""\b\f""#),
            ("\u{1}\u{1f}", r#""\u0001\u001f""#),
            ("/é", r#""/é""#),
        ];
        for (input, expected) in tests {
            assert_eq!(string(input).make_print_value(), String::from(expected));
        }
    }

    #[test]
    fn test_print_object() {
        #[rustfmt::skip]
        let tests = vec![
            ("{}", "{}"),
            ("{    }", "{}"),
            (r#"{"a":123}"#, r#"{"a":123}"#),
            (r#"{ "a" : 123 , "bc" : 45 }"#, r#"{"a":123,"bc":45}"#),
            (r#"{"b": 1, "a": 2}"#, r#"{"b":1,"a":2}"#),
            (
                r#"{"a":123,"b":{"c":45,"d":6789}}"#,
                r#"{"a":123,"b":{"c":45,"d":6789}}"#,
            ),
            (r#"{"a": {}, "b": []}"#, r#"{"a":{},"b":[]}"#),
            (r#"{"k": 1, "k": 2}"#, r#"{"k":1}"#),
            (r#"{"q\"k": "v\\"}"#, r#"{"q\"k":"v\\"}"#),
        ];
        for (input, expected) in tests {
            assert_eq!(format(input), String::from(expected));
        }
    }

    #[test]
    fn test_print_array() {
        #[rustfmt::skip]
        let tests = vec![
            (r#"{"x": [    ]}"#, r#"{"x":[]}"#),
            (r#"{"x": [1, 23, 4]}"#, r#"{"x":[1,23,4]}"#),
            (r#"{"x": [true, null, "s", 1.5e2]}"#, r#"{"x":[true,null,"s",150]}"#),
            (r#"{"x": [{"a": 1}, {"b": [23]}]}"#, r#"{"x":[{"a":1},{"b":[23]}]}"#),
        ];
        for (input, expected) in tests {
            assert_eq!(format(input), String::from(expected));
        }
    }

    #[test]
    fn test_display_matches_print_value() {
        let o = JsonObject::parse(r#"{"a": [1, "two"]}"#).unwrap();
        assert_eq!(o.to_string(), o.make_print_value());
        let a = o.get("a").unwrap();
        assert_eq!(a.to_string(), r#"[1,"two"]"#);
        assert_eq!(a.as_array().unwrap().to_string(), r#"[1,"two"]"#);
    }

    #[test]
    fn test_print_is_idempotent() {
        let o = JsonObject::parse(r#"{"z": 0.1, "y": [false, {"x": null}]}"#).unwrap();
        assert_eq!(o.make_print_value(), o.make_print_value());
    }
}
