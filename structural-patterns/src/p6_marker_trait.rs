// Pattern 6: Marker Trait - Serialization Opt-In
// The two required capabilities live on a supertrait; the empty marker trait
// is the opt-in. For values whose concrete type has been erased to dyn Any,
// a probe recovers the capabilities or refuses without attempting to
// serialize.

use std::any::Any;

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
enum SerializeError {
    #[error("object cannot be serialized")]
    NotSerializable,
    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

trait Sellable {
    fn name(&self) -> &str;
    fn price(&self) -> u64;
}

// The marker: having the capabilities is not enough, a type must also opt in.
trait Serializable: Sellable {}

// The wire shape, independent of any concrete product type.
#[derive(Serialize)]
struct Listing<'a> {
    name: &'a str,
    price: u64,
}

fn serialize<T: Serializable>(item: &T) -> Result<String, SerializeError> {
    let listing = Listing {
        name: item.name(),
        price: item.price(),
    };
    Ok(serde_json::to_string(&listing)?)
}

// ============================================================================
// Example: Products
// ============================================================================

struct Car {
    name: String,
    price: u64,
}

impl Car {
    fn new(name: &str, price: u64) -> Self {
        Car {
            name: name.to_string(),
            price,
        }
    }
}

impl Sellable for Car {
    fn name(&self) -> &str {
        &self.name
    }
    fn price(&self) -> u64 {
        self.price
    }
}

impl Serializable for Car {}

struct Book {
    title: String,
    price: u64,
}

impl Sellable for Book {
    fn name(&self) -> &str {
        &self.title
    }
    fn price(&self) -> u64 {
        self.price
    }
}

impl Serializable for Book {}

// Has a name and a price field, but the price is free text and the type
// never opts in. The probe below must refuse it without looking inside.
struct Voucher {
    #[allow(dead_code)]
    name: String,
    #[allow(dead_code)]
    price: String,
}

// ============================================================================
// Example: Probing Type-Erased Values
// ============================================================================

fn as_serializable(value: &dyn Any) -> Option<&dyn Sellable> {
    if let Some(car) = value.downcast_ref::<Car>() {
        return Some(car);
    }
    if let Some(book) = value.downcast_ref::<Book>() {
        return Some(book);
    }
    None
}

fn serialize_any(value: &dyn Any) -> Result<String, SerializeError> {
    let item = as_serializable(value).ok_or(SerializeError::NotSerializable)?;
    let listing = Listing {
        name: item.name(),
        price: item.price(),
    };
    Ok(serde_json::to_string(&listing)?)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_types_serialize() {
        let product = Car::new("Laptop", 999);
        assert_eq!(
            serialize(&product).unwrap(),
            r#"{"name":"Laptop","price":999}"#
        );

        let book = Book {
            title: "Refactoring".to_string(),
            price: 45,
        };
        assert_eq!(
            serialize(&book).unwrap(),
            r#"{"name":"Refactoring","price":45}"#
        );
    }

    #[test]
    fn probe_accepts_marked_types() {
        let product: Box<dyn Any> = Box::new(Car::new("Laptop", 999));
        assert_eq!(
            serialize_any(product.as_ref()).unwrap(),
            r#"{"name":"Laptop","price":999}"#
        );
    }

    #[test]
    fn probe_refuses_unmarked_shapes() {
        let voucher: Box<dyn Any> = Box::new(Voucher {
            name: "Laptop".to_string(),
            price: "not available".to_string(),
        });
        assert!(matches!(
            serialize_any(voucher.as_ref()),
            Err(SerializeError::NotSerializable)
        ));

        let number: Box<dyn Any> = Box::new(999u64);
        assert!(serialize_any(number.as_ref()).is_err());
    }
}

fn main() {
    println!("=== Marker Trait: Serialization Opt-In ===\n");

    let product = Car::new("Laptop", 999);
    match serialize(&product) {
        Ok(json) => println!("serialized product: {json}"),
        Err(err) => println!("failed: {err}"),
    }

    println!("\n=== Probing dyn Any ===");
    let shapes: Vec<Box<dyn Any>> = vec![
        Box::new(Car::new("Sedan", 24_000)),
        Box::new(Voucher {
            name: "Laptop".to_string(),
            price: "not available".to_string(),
        }),
    ];

    for shape in &shapes {
        match serialize_any(shape.as_ref()) {
            Ok(json) => println!("serialized: {json}"),
            Err(err) => println!("refused: {err}"),
        }
    }
}
