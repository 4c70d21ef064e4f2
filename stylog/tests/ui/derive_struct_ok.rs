use stylog::{Loggable, Object, Value};

#[derive(Loggable)]
struct Address {
    city: String,
    #[loggable(rename = "zipCode")]
    zip_code: String,
}

#[derive(Loggable)]
struct Customer {
    name: String,
    email: Option<String>,
    addresses: Vec<Address>,
    extra: Object,
    #[loggable(skip)]
    connection: std::fs::File,
}

#[derive(Loggable)]
struct Meters(f64);

#[derive(Loggable)]
struct Empty;

fn takes_loggable<T: Loggable>(value: &T) -> Value {
    value.to_log_value()
}

fn main() {
    let _ = takes_loggable(&Meters(1.5));
    let _ = takes_loggable(&Empty);
    let _ = |customer: &Customer| takes_loggable(customer);
}
