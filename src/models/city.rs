/// A Tunisian city/delegation with both display names and coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct City {
    pub id: &'static str,
    pub name_ar: &'static str,
    pub name_fr: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl std::fmt::Display for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name_fr, self.name_ar)
    }
}
