//! Custom constraint kinds registered by the application.

use valmap_tests::prelude::*;

/// Postal code check supplied by the application.
struct ZipCode;

impl ConstraintKind for ZipCode {
    const NAME: &'static str = "ZipCode";
}

fn zip_code_kind() -> KindDef {
    KindDef::new("ZipCode")
        .required("country", AttrType::String)
        .attr("strict", AttrType::Bool)
}

fn zip_code_location() -> Location {
    Location::Property {
        bean: BeanType::of::<Address>(),
        name: "zip_code".into(),
        access: AccessKind::Field,
    }
}

mod registration {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("zip_code")
            .kind(zip_code_kind())
            .step(
                "typed_marker",
                |r| {
                    r.type_of::<Address>()
                        .property("zip_code", AccessKind::Field)?
                        .constraint(ZipCode)?
                        .param("country", "DE")
                        .done()
                },
                |a| a.kinds(["ZipCode"]).at(zip_code_location()),
            )
            .step(
                "generic_by_name",
                |r| {
                    r.type_of::<Address>()
                        .property("zip_code", AccessKind::Field)?
                        .generic_constraint("ZipCode")?
                        .param("country", "FR")
                        .param("strict", true)
                        .done()
                },
                |a| a.kinds(["ZipCode"]),
            )
            .step(
                "wrong_attribute_type",
                |r| {
                    r.type_of::<Address>()
                        .property("zip_code", AccessKind::Field)?
                        .generic_constraint("ZipCode")?
                        .param("country", 49)
                        .done()
                },
                |a| a.error("expected String, got"),
            )
            .step(
                "missing_country",
                |r| {
                    r.type_of::<Address>()
                        .property("zip_code", AccessKind::Field)?
                        .constraint(ZipCode)?
                        .done()
                },
                |a| a.error("Missing required attribute country"),
            )
    }

    #[test]
    fn test_custom_kind() {
        let mapping = scenario().run().unwrap();

        let countries: Vec<&str> = mapping
            .constraints_at(&zip_code_location())
            .into_iter()
            .filter_map(|c| c.get_attr("country").and_then(Value::as_str))
            .collect();
        assert_eq!(countries, vec!["DE", "FR"]);
    }
}

mod unknown_kinds {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unregistered_kind_rejected() {
        let scenario = Scenario::new("unregistered").step(
            "zip_code_without_registration",
            |r| {
                r.type_of::<Address>()
                    .property("zip_code", AccessKind::Field)?
                    .constraint(ZipCode)?
                    .done()
            },
            |a| a.error("Unsupported constraint kind: \"ZipCode\""),
        );

        scenario.run().unwrap();
    }

    #[test]
    fn test_generic_builtin_kind() {
        let registry = ConstraintRegistry::new();

        registry
            .type_of::<Person>()
            .method("setAge", tokens![i32])
            .unwrap()
            .parameter(0)
            .unwrap()
            .generic_constraint("Max")
            .unwrap()
            .param("value", 150)
            .done()
            .unwrap();

        let snapshot = registry.snapshot();
        let constraint = snapshot[0].as_constraint().unwrap();
        assert_eq!(constraint.descriptor.kind, "Max");
        assert_eq!(
            constraint.descriptor.get_attr("value"),
            Some(&Value::Int(150))
        );
    }

    #[test]
    fn test_empty_kind_name() {
        let registry = ConstraintRegistry::new();
        let person = registry.type_of::<Person>();

        let result = person.generic_constraint("");

        assert!(matches!(
            result,
            Err(MappingError::UnsupportedConstraintKind { .. })
        ));
    }
}
