//! Method cursor integration tests.

use valmap_tests::prelude::*;

fn set_age() -> MethodSignature {
    MethodSignature::new(BeanType::of::<Person>(), "setAge", tokens![i32]).unwrap()
}

fn age_parameter() -> Location {
    Location::MethodParameter {
        signature: set_age(),
        index: 0,
    }
}

fn age_return_value() -> Location {
    Location::MethodReturn {
        signature: set_age(),
    }
}

mod person_age {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("person_age")
            .step(
                "min_on_first_parameter",
                |r| {
                    r.type_of::<Person>()
                        .method("setAge", tokens![i32])?
                        .parameter(0)?
                        .constraint(Min)?
                        .value(0)
                        .done()
                },
                |a| {
                    a.declared(1)
                        .constraints(1)
                        .kinds(["Min"])
                        .at(age_parameter())
                },
            )
            .step(
                "navigation_records_nothing",
                |r| {
                    let method = r.type_of::<Person>().method("setAge", tokens![i32])?;
                    method.parameter(0)?.return_value();
                    method.property("age", AccessKind::Field)?;
                    Ok(())
                },
                |a| a.nothing(),
            )
    }

    #[test]
    fn test_min_on_set_age_parameter() {
        let mapping = scenario().run().unwrap();

        let constraints = mapping.constraints_at(&age_parameter());
        assert_eq!(constraints.len(), 1);
        assert_eq!(constraints[0].kind, "Min");
        assert_eq!(constraints[0].get_attr("value"), Some(&Value::Int(0)));
    }
}

mod parameter_and_return_value {
    use super::*;
    use pretty_assertions::assert_eq;

    pub fn scenario() -> Scenario {
        Scenario::new("parameter_and_return_value")
            .step(
                "parameter_then_return_value",
                |r| {
                    let param = r
                        .type_of::<Person>()
                        .method("setAge", tokens![i32])?
                        .parameter(0)?;
                    param.constraint(Range)?.min(0).max(150).done()?;
                    param.return_value().constraint(Null)?.done()
                },
                |a| {
                    a.declared(2).kinds(["Range", "Null"]).check(|d| {
                        d[0].location() == &age_parameter()
                            && d[1].location() == &age_return_value()
                    })
                },
            )
            .step(
                "cascade_on_return_value",
                |r| {
                    r.type_of::<Person>()
                        .method("setAge", tokens![i32])?
                        .valid();
                    Ok(())
                },
                |a| a.cascades(1).at(age_return_value()),
            )
    }

    #[test]
    fn test_declarations_grouped_by_signature() {
        let mapping = scenario().run().unwrap();

        assert_eq!(mapping.method_declarations(&set_age()).len(), 3);
        assert!(mapping.is_cascaded(&age_return_value()));
        assert!(!mapping.is_cascaded(&age_parameter()));
    }
}

mod independent_cursors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sibling_cursors_do_not_alias() {
        // GIVEN two cursors for the same method from one type cursor
        let registry = ConstraintRegistry::new();
        let person = registry.type_of::<Person>();
        let first = person.method("m", tokens![String, i32]).unwrap();
        let second = person.method("m", tokens![String, i32]).unwrap();

        // WHEN the first moves to a parameter and both declare
        first
            .parameter(1)
            .unwrap()
            .constraint(NotNull)
            .unwrap()
            .done()
            .unwrap();
        second.constraint(NotNull).unwrap().done().unwrap();

        // THEN the second still targets the return value
        assert_eq!(second.target(), MethodTarget::ReturnValue);
        let targets: Vec<_> = registry
            .snapshot()
            .iter()
            .map(|d| d.location().method_target())
            .collect();
        assert_eq!(
            targets,
            vec![
                Some(MethodTarget::Parameter(1)),
                Some(MethodTarget::ReturnValue)
            ]
        );
    }

    #[test]
    fn test_overloads_are_distinct_methods() {
        let registry = ConstraintRegistry::new();
        let person = registry.type_of::<Person>();

        let by_int = person.method("setAge", tokens![i32]).unwrap();
        let by_str = person.method("setAge", tokens![String]).unwrap();

        assert_ne!(by_int.signature(), by_str.signature());
        assert_eq!(by_int.signature().name(), by_str.signature().name());
    }
}

mod parameter_index {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_eager_index_fails_at_navigation() {
        let scenario = Scenario::new("eager_index").step(
            "parameter_out_of_range",
            |r| {
                r.type_of::<Person>()
                    .method("setAge", tokens![i32])?
                    .parameter(3)?;
                Ok(())
            },
            |a| a.error_pattern(r"Parameter index 3 out of range for .*setAge\(i32\)"),
        );

        let mapping = scenario.run().unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_deferred_index_fails_at_freeze() {
        let scenario = Scenario::new("deferred_index")
            .config(MappingConfig::new().with_index_check(IndexCheck::Deferred))
            .step(
                "parameter_out_of_range",
                |r| {
                    r.type_of::<Person>()
                        .method("setAge", tokens![i32])?
                        .parameter(3)?
                        .constraint(NotNull)?
                        .done()
                },
                |a| a.constraints(1),
            );

        let err = scenario
            .run_expecting_freeze_error("Parameter index 3 out of range")
            .unwrap();
        assert!(matches!(
            err,
            MappingError::ParameterIndexOutOfRange {
                index: 3,
                arity: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_argument_method() {
        let registry = ConstraintRegistry::new();

        let getter = registry
            .type_of::<Person>()
            .method("getName", tokens![])
            .unwrap();

        assert_eq!(getter.signature().arity(), 0);
        assert!(getter.parameter(0).is_err());
        assert!(getter.return_value().constraint(NotBlank).is_ok());
    }
}
