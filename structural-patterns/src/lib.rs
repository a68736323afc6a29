// Structural Patterns Catalog
// This crate demonstrates the structural patterns, one runnable file each.

pub mod examples {
    //! # Structural Patterns
    //!
    //! Every file under `src/` is a self-contained script: it defines its own
    //! small types, wires them together in `main`, and carries its own tests.
    //! No file depends on another.
    //!
    //! ## Pattern 1: Adapter
    //! - Task fields translated into an external calendar's event shape
    //!
    //! ## Pattern 2: Composite
    //! - Org chart as an arena of nodes with index ids
    //!
    //! ## Pattern 3: Facade
    //! - Order placement over three sub-services
    //! - Aggregation-only variant
    //!
    //! ## Pattern 4: Flyweight
    //! - Keyed glyph cache
    //! - Shared heavy assets with per-instance stats
    //!
    //! ## Pattern 5: Proxy
    //! - Authorization guard, delegation, access logging
    //!
    //! ## Pattern 6: Marker Trait
    //! - Serialization opt-in via an empty marker trait
    //! - Runtime capability probe for type-erased values
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_adapter
    //! cargo run --bin p2_composite
    //! cargo run --bin p3_facade
    //! cargo run --bin p4_flyweight
    //! cargo run --bin p4_flyweight_shared
    //! cargo run --bin p5_proxy
    //! cargo run --bin p6_marker_trait
    //! ```
}
