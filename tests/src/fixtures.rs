//! Bean and marker types shared by the integration tests.

/// A person with a name, an age and an address.
#[derive(Debug, Default)]
pub struct Person {
    pub name: String,
    pub age: i32,
    pub address: Option<Address>,
}

#[derive(Debug, Default)]
pub struct Address {
    pub street: String,
    pub zip_code: String,
}

#[derive(Debug, Default)]
pub struct Customer {
    pub email: String,
    pub orders: Vec<Order>,
}

#[derive(Debug, Default)]
pub struct Order {
    pub number: String,
    pub lines: Vec<OrderLine>,
}

#[derive(Debug, Default)]
pub struct OrderLine {
    pub quantity: u32,
    pub price: String,
}

/// Validation group checked first.
pub struct Basic;

/// Validation group checked after [`Basic`].
pub struct Extended;

/// Payload marker carried by constraints.
pub struct Severity;
