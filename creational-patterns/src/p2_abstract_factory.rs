// Pattern 2: Abstract Factory - Car Part Families
// One factory per brand produces a matched family of part assemblers, so a
// door and a roof obtained from the same factory always belong together.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Brand {
    Honda,
    Mazda,
    Tesla,
}

impl Brand {
    fn parse(tag: &str) -> Result<Self, BrandError> {
        match tag {
            "honda" => Ok(Brand::Honda),
            "mazda" => Ok(Brand::Mazda),
            "tesla" => Ok(Brand::Tesla),
            other => Err(BrandError::Unknown(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
enum BrandError {
    #[error("invalid car brand: {0}")]
    Unknown(String),
}

// Part interfaces (the table columns).
trait Door {
    fn assemble(&self) -> String;
}

trait Roof {
    fn assemble(&self) -> String;
}

// Family interface (a table row).
trait CarFactory {
    fn door_assembler(&self) -> Box<dyn Door>;
    fn roof_assembler(&self) -> Box<dyn Roof>;
}

// ============================================================================
// Example: Concrete Families (the table cells)
// ============================================================================

struct HondaDoor;
impl Door for HondaDoor {
    fn assemble(&self) -> String {
        "Honda Door".to_string()
    }
}

struct HondaRoof;
impl Roof for HondaRoof {
    fn assemble(&self) -> String {
        "Honda Roof".to_string()
    }
}

struct MazdaDoor;
impl Door for MazdaDoor {
    fn assemble(&self) -> String {
        "Mazda Door".to_string()
    }
}

struct MazdaRoof;
impl Roof for MazdaRoof {
    fn assemble(&self) -> String {
        "Mazda Roof".to_string()
    }
}

struct TeslaDoor;
impl Door for TeslaDoor {
    fn assemble(&self) -> String {
        "Tesla Door".to_string()
    }
}

struct TeslaRoof;
impl Roof for TeslaRoof {
    fn assemble(&self) -> String {
        "Tesla Roof".to_string()
    }
}

struct HondaFactory;
impl CarFactory for HondaFactory {
    fn door_assembler(&self) -> Box<dyn Door> {
        Box::new(HondaDoor)
    }
    fn roof_assembler(&self) -> Box<dyn Roof> {
        Box::new(HondaRoof)
    }
}

struct MazdaFactory;
impl CarFactory for MazdaFactory {
    fn door_assembler(&self) -> Box<dyn Door> {
        Box::new(MazdaDoor)
    }
    fn roof_assembler(&self) -> Box<dyn Roof> {
        Box::new(MazdaRoof)
    }
}

struct TeslaFactory;
impl CarFactory for TeslaFactory {
    fn door_assembler(&self) -> Box<dyn Door> {
        Box::new(TeslaDoor)
    }
    fn roof_assembler(&self) -> Box<dyn Roof> {
        Box::new(TeslaRoof)
    }
}

fn factory_for(brand: Brand) -> Box<dyn CarFactory> {
    match brand {
        Brand::Honda => Box::new(HondaFactory),
        Brand::Mazda => Box::new(MazdaFactory),
        Brand::Tesla => Box::new(TeslaFactory),
    }
}

fn factory_for_tag(tag: &str) -> Result<Box<dyn CarFactory>, BrandError> {
    Ok(factory_for(Brand::parse(tag)?))
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("=== Abstract Factory: Car Brands ===\n");

    let mazda_factory = factory_for(Brand::Mazda);
    let mazda_roof = mazda_factory.roof_assembler().assemble();
    let mazda_door = mazda_factory.door_assembler().assemble();

    // ..or in one chain:
    let honda_roof = factory_for(Brand::Honda).roof_assembler().assemble();

    println!("{honda_roof}, {mazda_roof}, {mazda_door}");

    println!("\n=== Unknown Brand Tag ===");
    if let Err(err) = factory_for_tag("trabant") {
        println!("rejected: {err}");
    }
}
