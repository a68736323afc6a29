// Pattern 3: Facade - One Call over Three Sub-Services
// place_order() sequences inventory, discounts, and ordering behind a single
// method. A second section shows the aggregation-only form, where the facade
// adds no decisions at all.

// ============================================================================
// Example: Order Placement
// ============================================================================

struct InventoryService {
    in_stock: bool,
}

impl InventoryService {
    fn product_in_store(&self) -> bool {
        self.in_stock
    }
}

struct DiscountsService {
    eligible: bool,
}

impl DiscountsService {
    fn is_eligible_for_discount(&self) -> bool {
        self.eligible
    }

    fn discount_percent(&self) -> u32 {
        5
    }
}

struct OrderingService;

impl OrderingService {
    fn place_order(&self) -> String {
        "Order placed successfully".to_string()
    }
}

struct PlaceOrderFacade {
    inventory: InventoryService,
    discounts: DiscountsService,
    ordering: OrderingService,
}

impl PlaceOrderFacade {
    fn new(in_stock: bool, eligible: bool) -> Self {
        PlaceOrderFacade {
            inventory: InventoryService { in_stock },
            discounts: DiscountsService { eligible },
            ordering: OrderingService,
        }
    }

    /// The single entry point. Returns the narration of every step taken.
    fn place_order(&self) -> Vec<String> {
        let mut steps = Vec::new();

        if !self.inventory.product_in_store() {
            steps.push("Product is not available".to_string());
            return steps;
        }
        steps.push("Product is available".to_string());

        if self.discounts.is_eligible_for_discount() {
            let percent = self.discounts.discount_percent();
            steps.push(format!("{percent}% discount applied successfully"));
        }

        steps.push(self.ordering.place_order());
        steps
    }
}

// ============================================================================
// Example: Aggregation-Only Facade
// ============================================================================

struct GoogleParser;
impl GoogleParser {
    fn parse(&self) -> String {
        "Parsing Google search results".to_string()
    }
}

struct BingParser;
impl BingParser {
    fn parse(&self) -> String {
        "Parsing Bing search results".to_string()
    }
}

struct YahooParser;
impl YahooParser {
    fn parse(&self) -> String {
        "Parsing Yahoo search results".to_string()
    }
}

struct SearchParserFacade {
    google: GoogleParser,
    bing: BingParser,
    yahoo: YahooParser,
}

impl SearchParserFacade {
    fn new() -> Self {
        SearchParserFacade {
            google: GoogleParser,
            bing: BingParser,
            yahoo: YahooParser,
        }
    }

    fn parse_all_results(&self) -> Vec<String> {
        vec![
            self.google.parse(),
            self.bing.parse(),
            self.yahoo.parse(),
        ]
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("=== Facade: Placing an Order ===\n");

    let store = PlaceOrderFacade::new(true, true);
    for step in store.place_order() {
        println!("{step}");
    }

    println!("\nwithout a discount:");
    let store = PlaceOrderFacade::new(true, false);
    for step in store.place_order() {
        println!("{step}");
    }

    println!("\nout of stock:");
    let store = PlaceOrderFacade::new(false, false);
    for step in store.place_order() {
        println!("{step}");
    }

    println!("\n=== Facade: Aggregation Only ===\n");
    let search_facade = SearchParserFacade::new();
    for line in search_facade.parse_all_results() {
        println!("{line}");
    }
}
