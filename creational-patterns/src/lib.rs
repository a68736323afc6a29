// Creational Patterns Catalog
// This crate demonstrates the creational patterns, one runnable file each.

pub mod examples {
    //! # Creational Patterns
    //!
    //! Every file under `src/` is a self-contained script: it defines its own
    //! small types, wires them together in `main`, and carries its own tests.
    //! No file depends on another.
    //!
    //! ## Pattern 1: Factory
    //! - Trait-object dispatch by category tag
    //! - Closed sum type with exhaustive construction
    //! - Function-pointer construction table
    //!
    //! ## Pattern 2: Abstract Factory
    //! - Car-brand part families
    //! - Task families, plus a trait-composition variant
    //!
    //! ## Pattern 3: Builder
    //! - Consuming fluent builder
    //!
    //! ## Pattern 4: Singleton
    //! - OnceLock accessor, with dependency injection as the alternative
    //! - Shared-by-construction variant kept flawed on purpose
    //!
    //! ## Pattern 5: Object Pool
    //! - Free list with a draining capacity counter
    //! - Corrected checked-out accounting
    //!
    //! ## Pattern 6: Lazy Initialization
    //! - Eager vs deferred loading of a related collection
    //!
    //! Run individual examples with:
    //! ```bash
    //! cargo run --bin p1_factory_trait
    //! cargo run --bin p1_factory_enum
    //! cargo run --bin p1_factory_fn
    //! cargo run --bin p2_abstract_factory
    //! cargo run --bin p2_abstract_factory_tasks
    //! cargo run --bin p3_builder
    //! cargo run --bin p4_singleton
    //! cargo run --bin p4_singleton_flawed
    //! cargo run --bin p5_object_pool
    //! cargo run --bin p5_object_pool_counted
    //! cargo run --bin p6_lazy_init
    //! ```
}
