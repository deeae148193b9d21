use crate::models::City;

/// Built-in city table: one entry per governorate capital plus a few large
/// delegations, enough for nearest-city lookup anywhere in the country.
pub const CITIES: &[City] = &[
    City { id: "tunis", name_ar: "تونس", name_fr: "Tunis", lat: 36.8065, lng: 10.1815 },
    City { id: "sfax", name_ar: "صفاقس", name_fr: "Sfax", lat: 34.7406, lng: 10.7603 },
    City { id: "sousse", name_ar: "سوسة", name_fr: "Sousse", lat: 35.8256, lng: 10.6369 },
    City { id: "kairouan", name_ar: "القيروان", name_fr: "Kairouan", lat: 35.6781, lng: 10.0963 },
    City { id: "bizerte", name_ar: "بنزرت", name_fr: "Bizerte", lat: 37.2744, lng: 9.8739 },
    City { id: "gabes", name_ar: "قابس", name_fr: "Gabès", lat: 33.8815, lng: 10.0982 },
    City { id: "ariana", name_ar: "أريانة", name_fr: "Ariana", lat: 36.8625, lng: 10.1956 },
    City { id: "gafsa", name_ar: "قفصة", name_fr: "Gafsa", lat: 34.4250, lng: 8.7842 },
    City { id: "monastir", name_ar: "المنستير", name_fr: "Monastir", lat: 35.7643, lng: 10.8113 },
    City { id: "ben_arous", name_ar: "بن عروس", name_fr: "Ben Arous", lat: 36.7531, lng: 10.2189 },
    City { id: "kasserine", name_ar: "القصرين", name_fr: "Kasserine", lat: 35.1676, lng: 8.8365 },
    City { id: "medenine", name_ar: "مدنين", name_fr: "Médenine", lat: 33.3549, lng: 10.5055 },
    City { id: "nabeul", name_ar: "نابل", name_fr: "Nabeul", lat: 36.4561, lng: 10.7376 },
    City { id: "tataouine", name_ar: "تطاوين", name_fr: "Tataouine", lat: 32.9297, lng: 10.4518 },
    City { id: "beja", name_ar: "باجة", name_fr: "Béja", lat: 36.7256, lng: 9.1817 },
    City { id: "jendouba", name_ar: "جندوبة", name_fr: "Jendouba", lat: 36.5011, lng: 8.7802 },
    City { id: "el_kef", name_ar: "الكاف", name_fr: "El Kef", lat: 36.1742, lng: 8.7049 },
    City { id: "mahdia", name_ar: "المهدية", name_fr: "Mahdia", lat: 35.5047, lng: 11.0622 },
    City { id: "sidi_bouzid", name_ar: "سيدي بوزيد", name_fr: "Sidi Bouzid", lat: 35.0382, lng: 9.4849 },
    City { id: "tozeur", name_ar: "توزر", name_fr: "Tozeur", lat: 33.9197, lng: 8.1335 },
    City { id: "siliana", name_ar: "سليانة", name_fr: "Siliana", lat: 36.0849, lng: 9.3708 },
    City { id: "zaghouan", name_ar: "زغوان", name_fr: "Zaghouan", lat: 36.4029, lng: 10.1429 },
    City { id: "kebili", name_ar: "قبلي", name_fr: "Kébili", lat: 33.7044, lng: 8.9690 },
    City { id: "manouba", name_ar: "منوبة", name_fr: "Manouba", lat: 36.8101, lng: 10.0863 },
    City { id: "hammamet", name_ar: "الحمامات", name_fr: "Hammamet", lat: 36.4000, lng: 10.6167 },
    City { id: "la_marsa", name_ar: "المرسى", name_fr: "La Marsa", lat: 36.8764, lng: 10.3253 },
    City { id: "houmt_souk", name_ar: "حومة السوق", name_fr: "Houmt Souk (Djerba)", lat: 33.8076, lng: 10.8451 },
    City { id: "douz", name_ar: "دوز", name_fr: "Douz", lat: 33.4660, lng: 9.0203 },
    City { id: "zarzis", name_ar: "جرجيس", name_fr: "Zarzis", lat: 33.5039, lng: 11.1122 },
    City { id: "msaken", name_ar: "مساكن", name_fr: "M'saken", lat: 35.7280, lng: 10.5800 },
];

/// Plain Euclidean distance in degree space. Good enough for picking the
/// closest of a few dozen points inside one small country.
pub fn euclidean_distance(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = lat1 - lat2;
    let d_lng = lng1 - lng2;
    (d_lat * d_lat + d_lng * d_lng).sqrt()
}

/// Linear scan for the closest built-in city to the given coordinates.
pub fn nearest_city(lat: f64, lng: f64) -> &'static City {
    let mut nearest = &CITIES[0];
    let mut min_dist = f64::INFINITY;
    for city in CITIES {
        let dist = euclidean_distance(lat, lng, city.lat, city.lng);
        if dist < min_dist {
            min_dist = dist;
            nearest = city;
        }
    }
    nearest
}

/// Case-insensitive substring search over French names, Arabic names and
/// ids. An empty query returns the whole table.
pub fn search(query: &str) -> Vec<&'static City> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return CITIES.iter().collect();
    }
    CITIES
        .iter()
        .filter(|city| {
            city.name_fr.to_lowercase().contains(&q)
                || city.name_ar.contains(query.trim())
                || city.id.contains(&q)
        })
        .collect()
}

pub fn by_id(id: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_to_downtown_tunis_is_tunis() {
        assert_eq!(nearest_city(36.80, 10.18).id, "tunis");
    }

    #[test]
    fn nearest_handles_points_outside_the_table() {
        // Somewhere in the deep south, closest listed city is Tataouine
        assert_eq!(nearest_city(32.0, 10.3).id, "tataouine");
    }

    #[test]
    fn euclidean_distance_is_symmetric() {
        let a = euclidean_distance(36.8, 10.1, 34.7, 10.7);
        let b = euclidean_distance(34.7, 10.7, 36.8, 10.1);
        assert!((a - b).abs() < f64::EPSILON);
    }

    #[test]
    fn search_matches_french_name_case_insensitively() {
        let results = search("SFax");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "sfax");
    }

    #[test]
    fn search_matches_arabic_name() {
        let results = search("صفاقس");
        assert_eq!(results[0].id, "sfax");
    }

    #[test]
    fn empty_query_returns_everything() {
        assert_eq!(search("").len(), CITIES.len());
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(by_id("kairouan").unwrap().name_fr, "Kairouan");
        assert!(by_id("atlantis").is_none());
    }
}
