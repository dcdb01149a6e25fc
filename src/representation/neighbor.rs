/// One entry of a neighborhood: a training gene and its weight against the test gene.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Neighbor {
    pub training_id: String,
    pub weight: u32,
}

impl Neighbor {
    pub fn new(training_id: &str, weight: u32) -> Neighbor {
        return Neighbor {
            training_id: training_id.to_string(),
            weight,
        };
    }
}
