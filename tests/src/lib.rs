//! valmap Tests
//!
//! Scenario framework for exercising mapping sessions end to end.
//!
//! A scenario is a named list of steps. Each step runs a closure against the
//! session's registry and verifies what that closure declared:
//!
//! ```ignore
//! Scenario::new("person_age")
//!     .step("min_on_age", |r| {
//!         r.type_of::<Person>()
//!             .method("setAge", tokens![i32])?
//!             .parameter(0)?
//!             .constraint(Min)?
//!             .value(0)
//!             .done()
//!     }, |a| a.constraints(1).kinds(["Min"]))
//!     .run()
//!     .unwrap();
//! ```

mod error;
mod fixtures;

pub use assertion::*;
pub use error::*;
pub use fixtures::*;
pub use scenario::*;

pub mod prelude {
    pub use crate::{
        Address, Assertion, Basic, Customer, Extended, Order, OrderLine, Person, Scenario,
        ScenarioError, ScenarioResult, Severity,
    };
    pub use valmap_fluent::prelude::*;
}
