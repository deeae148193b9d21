pub mod cities;
pub mod qibla;

pub use cities::{by_id, euclidean_distance, nearest_city, search, CITIES};
pub use qibla::{distance_to_mecca, qibla_angle};
