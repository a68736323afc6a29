// Pattern 4: Flyweight - Keyed Glyph Cache
// One shared glyph per distinct (character, font, size) combination. The
// cache key is the concatenation of the intrinsic fields, and repeated
// requests hand back the same Rc.

use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug)]
struct Glyph {
    character: char,
    font: String,
    size: u32,
}

impl Glyph {
    fn display(&self) -> String {
        format!(
            "Character: {}, Font: {}, Size: {}",
            self.character, self.font, self.size
        )
    }
}

#[derive(Default)]
struct GlyphFactory {
    cache: HashMap<String, Rc<Glyph>>,
}

impl GlyphFactory {
    fn new() -> Self {
        GlyphFactory::default()
    }

    fn glyph(&mut self, character: char, font: &str, size: u32) -> Rc<Glyph> {
        let key = format!("{character}-{font}-{size}");
        Rc::clone(self.cache.entry(key).or_insert_with(|| {
            Rc::new(Glyph {
                character,
                font: font.to_string(),
                size,
            })
        }))
    }

    fn total(&self) -> usize {
        self.cache.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn same_key_shares_one_instance() {
        let mut factory = GlyphFactory::new();
        let a1 = factory.glyph('A', "Arial", 12);
        let a2 = factory.glyph('A', "Arial", 12);
        assert!(Rc::ptr_eq(&a1, &a2));
        assert_eq!(factory.total(), 1);
    }

    #[test]
    fn distinct_keys_get_distinct_instances() {
        let mut factory = GlyphFactory::new();
        let a = factory.glyph('A', "Arial", 12);
        let b = factory.glyph('B', "Arial", 12);
        let a_large = factory.glyph('A', "Arial", 14);
        assert!(!Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &a_large));
        assert_eq!(factory.total(), 3);
    }

    proptest! {
        #[test]
        fn cache_size_matches_distinct_keys(
            requests in prop::collection::vec(
                (prop::sample::select(vec!['a', 'b', 'c']), 10u32..14),
                0..40,
            ),
        ) {
            let mut factory = GlyphFactory::new();
            let mut distinct = HashSet::new();
            for (character, size) in requests {
                factory.glyph(character, "Arial", size);
                distinct.insert((character, size));
            }
            prop_assert_eq!(factory.total(), distinct.len());
        }
    }
}

fn main() {
    println!("=== Flyweight: Glyph Cache ===\n");

    let mut factory = GlyphFactory::new();
    let char_a = factory.glyph('A', "Arial", 12);
    let char_b = factory.glyph('B', "Times New Roman", 14);
    let char_c = factory.glyph('A', "Arial", 12); // reuses the existing flyweight

    println!("{}", char_a.display());
    println!("{}", char_b.display());
    println!("{}", char_c.display());

    println!("\nA and its repeat share one allocation: {}", Rc::ptr_eq(&char_a, &char_c));
    println!("total flyweights created: {}", factory.total());
}
