/// Fields accepted when creating a baked good.
#[derive(Clone, Debug, PartialEq)]
pub struct NewBakedGood {
    pub name: String,
    pub price: f64,
    pub bakery_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBakery {
    pub name: String,
}

/// The bakery fields a client may change. `None` leaves the stored value alone.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BakeryPatch {
    pub name: Option<String>,
}

impl BakeryPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}
