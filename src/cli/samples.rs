//! Sample B+ programs bundled into the binary.

/// A named sample program.
#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub name: &'static str,
    pub summary: &'static str,
    pub source: &'static str,
}

pub const SAMPLES: &[Sample] = &[
    Sample {
        name: "fibonacci",
        summary: "Fibonacci numbers below 100 with a while loop",
        source: include_str!("../../assets/samples/fibonacci.bp"),
    },
    Sample {
        name: "list_processing",
        summary: "Iterate over a list with a for loop",
        source: include_str!("../../assets/samples/list_processing.bp"),
    },
    Sample {
        name: "nested_loops",
        summary: "A for loop nested inside a while loop",
        source: include_str!("../../assets/samples/nested_loops.bp"),
    },
];

/// Look up a sample by name.
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}
