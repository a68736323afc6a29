// Pattern 4: Flyweight - Shared Heavy Assets
// Every sword aliases the factory's mesh and texture allocations; only the
// small per-instance stats differ from sword to sword.

use std::rc::Rc;

struct Sword {
    // Intrinsic state, shared across every sword from one factory.
    mesh_path: Rc<str>,
    texture_path: Rc<str>,
    // Extrinsic state, unique to this sword.
    damage: u32,
    durability: u32,
    price: u32,
}

impl Sword {
    fn describe(&self) -> String {
        format!(
            "Using a sword with mesh: {}, texture: {}. Damage: {}, Durability: {}, Price: {}",
            self.mesh_path, self.texture_path, self.damage, self.durability, self.price
        )
    }
}

struct SwordFactory {
    mesh_path: Rc<str>,
    texture_path: Rc<str>,
}

impl SwordFactory {
    fn new(mesh_path: &str, texture_path: &str) -> Self {
        SwordFactory {
            mesh_path: Rc::from(mesh_path),
            texture_path: Rc::from(texture_path),
        }
    }

    fn new_sword(&self, damage: u32, durability: u32, price: u32) -> Sword {
        Sword {
            mesh_path: Rc::clone(&self.mesh_path),
            texture_path: Rc::clone(&self.texture_path),
            damage,
            durability,
            price,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swords_alias_the_factory_assets() {
        let factory = SwordFactory::new("meshes/sword.nif", "textures/sword.tif");
        let one = factory.new_sword(20, 50, 100);
        let two = factory.new_sword(15, 40, 80);
        assert!(Rc::ptr_eq(&one.mesh_path, &two.mesh_path));
        assert!(Rc::ptr_eq(&one.texture_path, &factory.texture_path));
    }

    #[test]
    fn asset_reference_counts_track_the_swords() {
        let factory = SwordFactory::new("meshes/sword.nif", "textures/sword.tif");
        let swords: Vec<Sword> = (0..3).map(|i| factory.new_sword(10 + i, 50, 100)).collect();
        // The factory's copy plus one per sword.
        assert_eq!(Rc::strong_count(&factory.mesh_path), swords.len() + 1);
        drop(swords);
        assert_eq!(Rc::strong_count(&factory.mesh_path), 1);
    }

    #[test]
    fn stats_stay_per_sword() {
        let factory = SwordFactory::new("meshes/sword.nif", "textures/sword.tif");
        let strong = factory.new_sword(25, 60, 120);
        let cheap = factory.new_sword(15, 40, 80);
        assert_eq!(strong.damage, 25);
        assert_eq!(cheap.price, 80);
        assert!(strong.describe().contains("Damage: 25"));
    }
}

fn main() {
    println!("=== Flyweight: Shared Sword Assets ===\n");

    let factory = SwordFactory::new("meshes/sword.nif", "textures/sword.tif");
    let sword_stats = [(20, 50, 100), (15, 40, 80), (25, 60, 120)];

    let swords: Vec<Sword> = sword_stats
        .iter()
        .map(|&(damage, durability, price)| factory.new_sword(damage, durability, price))
        .collect();

    for sword in &swords {
        println!("{}", sword.describe());
    }

    println!(
        "\nmesh allocations alive: 1 (referenced {} times)",
        Rc::strong_count(&factory.mesh_path)
    );
}
