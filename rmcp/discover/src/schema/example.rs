//! Representative example payloads for a [`TypeExpr`] or a [`Model`].
//!
//! Every leaf becomes a placeholder such as `"<integer: priority>"` that
//! names the field it came from. Containers get exactly one representative
//! element (or entry), generated with a `item`/`key`/`value` suffix on the
//! context so nested placeholders stay traceable.

use serde::Serialize;
use serde_json::{Map, Value, ser::PrettyFormatter};

use super::{Model, ScalarKind, TypeExpr};

/// Example value for `ty`, labelled with `context`.
pub fn for_type(ty: &TypeExpr, context: &str) -> Value {
    match ty {
        TypeExpr::Scalar(ScalarKind::Null) => Value::Null,
        TypeExpr::Scalar(kind) => Value::String(format!("<{}: {context}>", kind.label())),
        TypeExpr::Sequence(element) => {
            Value::Array(vec![for_type(element, &format!("{context} item"))])
        }
        TypeExpr::Mapping(key, value) => {
            let key = match for_type(key, &format!("{context} key")) {
                Value::String(key) => key,
                other => other.to_string(),
            };
            let mut entry = Map::new();
            entry.insert(key, for_type(value, &format!("{context} value")));
            Value::Object(entry)
        }
    }
}

/// Example payload for a whole model, keyed by field name in declaration order.
pub fn for_model(model: &Model) -> Value {
    let fields = model
        .fields()
        .iter()
        .map(|field| (field.name().to_owned(), for_type(field.ty(), field.name())))
        .collect::<Map<_, _>>();
    Value::Object(fields)
}

/// Serialize an example as JSON with 4-space indentation.
pub fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

#[cfg(test)]
mod tests {
    use super::{for_model, for_type, to_pretty_json};
    use crate::schema::{FieldDescriptor, ScalarKind, TypeExpr, model::synthesize};
    use proptest::prelude::*;
    use proptest::test_runner::Config as ProptestConfig;
    use serde_json::json;

    #[test]
    fn scalar_placeholders() {
        assert_eq!(for_type(&TypeExpr::STRING, "name"), json!("<string: name>"));
        assert_eq!(
            for_type(&TypeExpr::Scalar(ScalarKind::Integer), "number"),
            json!("<integer: number>")
        );
        assert_eq!(
            for_type(&TypeExpr::Scalar(ScalarKind::Float), "ratio"),
            json!("<float: ratio>")
        );
        assert_eq!(
            for_type(&TypeExpr::Scalar(ScalarKind::Boolean), "subscribe"),
            json!("<boolean: subscribe>")
        );
        assert_eq!(for_type(&TypeExpr::ANY, "owner"), json!("<any: owner>"));
        assert_eq!(for_type(&TypeExpr::Scalar(ScalarKind::Null), "gap"), json!(null));
    }

    #[test]
    fn sequence_has_one_element() {
        let value = for_type(&TypeExpr::list(TypeExpr::STRING), "tags");
        assert_eq!(value, json!(["<string: tags item>"]));
    }

    #[test]
    fn mapping_has_one_entry() {
        let value = for_type(
            &TypeExpr::dict(TypeExpr::STRING, TypeExpr::Scalar(ScalarKind::Integer)),
            "scores",
        );
        assert_eq!(value, json!({ "<string: scores key>": "<integer: scores value>" }));
    }

    #[test]
    fn nested_containers() {
        let ty = TypeExpr::parse("Dict[str, Dict[str, List[str]]]");
        assert_eq!(
            for_type(&ty, "specialties"),
            json!({
                "<string: specialties key>": {
                    "<string: specialties value key>": ["<string: specialties value value item>"]
                }
            })
        );
    }

    #[test]
    fn container_keys_become_json_text() {
        let ty = TypeExpr::dict(TypeExpr::list(TypeExpr::STRING), TypeExpr::ANY);
        assert_eq!(
            for_type(&ty, "m"),
            json!({ r#"["<string: m key item>"]"#: "<any: m value>" })
        );
    }

    #[test]
    fn model_payload_keeps_field_order() {
        let model = synthesize(
            "Report",
            [
                FieldDescriptor::new("zeta", "", TypeExpr::STRING, true),
                FieldDescriptor::new("alpha", "", TypeExpr::list(TypeExpr::ANY), false),
            ],
        )
        .unwrap();

        let text = to_pretty_json(&for_model(&model)).unwrap();
        assert_eq!(
            text,
            "{\n    \"zeta\": \"<string: zeta>\",\n    \"alpha\": [\n        \"<any: alpha item>\"\n    ]\n}"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            failure_persistence: None,
            .. ProptestConfig::default()
        })]

        #[test]
        fn generation_is_deterministic(
            hint in "(List|Dict)\\[(str|int|float|bool), ?(str|List\\[int\\])\\]",
            context in "[a-z_]{1,12}",
        ) {
            let ty = TypeExpr::parse(&hint);
            prop_assert_eq!(for_type(&ty, &context), for_type(&ty, &context));
        }
    }
}
