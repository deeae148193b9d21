use super::{Dua, DuaCategory};

/// Built-in supplication set, one or two per category.
pub const DUAS: &[Dua] = &[
    Dua {
        title_fr: "À la rupture du jeûne",
        text_ar: "ذَهَبَ الظَّمَأُ وَابْتَلَّتِ الْعُرُوقُ وَثَبَتَ الْأَجْرُ إِنْ شَاءَ اللَّهُ",
        transliteration: "Dhahaba adh-dhama'u wabtallatil-'uruqu wa thabatal-ajru in sha Allah",
        translation_fr: "La soif est partie, les veines sont humidifiées et la récompense est confirmée, si Allah le veut.",
        source: "Abu Dawud 2357",
        category: DuaCategory::Iftar,
        repeat_count: None,
    },
    Dua {
        title_fr: "Avant de manger",
        text_ar: "اللَّهُمَّ لَكَ صُمْتُ وَعَلَى رِزْقِكَ أَفْطَرْتُ",
        transliteration: "Allahumma laka sumtu wa 'ala rizqika aftartu",
        translation_fr: "Ô Allah, c'est pour Toi que j'ai jeûné et c'est avec Ta subsistance que je romps mon jeûne.",
        source: "Abu Dawud 2358",
        category: DuaCategory::Iftar,
        repeat_count: None,
    },
    Dua {
        title_fr: "Intention du jeûne",
        text_ar: "نَوَيْتُ صَوْمَ غَدٍ عَنْ أَدَاءِ فَرْضِ شَهْرِ رَمَضَانَ هَذِهِ السَّنَةِ لِلَّهِ تَعَالَى",
        transliteration: "Nawaytu sawma ghadin 'an ada'i fardi shahri Ramadana hadhihis-sanati lillahi ta'ala",
        translation_fr: "J'ai l'intention de jeûner demain, en accomplissement de l'obligation du mois de Ramadan de cette année, pour Allah le Très-Haut.",
        source: "Tradition",
        category: DuaCategory::Suhoor,
        repeat_count: None,
    },
    Dua {
        title_fr: "Invocation du matin",
        text_ar: "أَصْبَحْنَا وَأَصْبَحَ الْمُلْكُ لِلَّهِ وَالْحَمْدُ لِلَّهِ",
        transliteration: "Asbahna wa asbahal-mulku lillahi wal-hamdu lillah",
        translation_fr: "Nous voici au matin, et la royauté appartient à Allah, et la louange est à Allah.",
        source: "Muslim 2723",
        category: DuaCategory::Morning,
        repeat_count: None,
    },
    Dua {
        title_fr: "Invocation du soir",
        text_ar: "أَمْسَيْنَا وَأَمْسَى الْمُلْكُ لِلَّهِ وَالْحَمْدُ لِلَّهِ",
        transliteration: "Amsayna wa amsal-mulku lillahi wal-hamdu lillah",
        translation_fr: "Nous voici au soir, et la royauté appartient à Allah, et la louange est à Allah.",
        source: "Muslim 2723",
        category: DuaCategory::Evening,
        repeat_count: None,
    },
    Dua {
        title_fr: "Avant de dormir",
        text_ar: "بِاسْمِكَ اللَّهُمَّ أَمُوتُ وَأَحْيَا",
        transliteration: "Bismika Allahumma amutu wa ahya",
        translation_fr: "C'est en Ton nom, ô Allah, que je meurs et que je vis.",
        source: "Bukhari 6324",
        category: DuaCategory::Sleep,
        repeat_count: None,
    },
    Dua {
        title_fr: "Nuit du Destin",
        text_ar: "اللَّهُمَّ إِنَّكَ عَفُوٌّ تُحِبُّ الْعَفْوَ فَاعْفُ عَنِّي",
        transliteration: "Allahumma innaka 'afuwwun tuhibbul-'afwa fa'fu 'anni",
        translation_fr: "Ô Allah, Tu es Pardonneur et Tu aimes le pardon, alors pardonne-moi.",
        source: "Tirmidhi 3513",
        category: DuaCategory::LaylatAlQadr,
        repeat_count: Some(3),
    },
    Dua {
        title_fr: "Dans ce monde et l'au-delà",
        text_ar: "رَبَّنَا آتِنَا فِي الدُّنْيَا حَسَنَةً وَفِي الْآخِرَةِ حَسَنَةً وَقِنَا عَذَابَ النَّارِ",
        transliteration: "Rabbana atina fid-dunya hasanatan wa fil-akhirati hasanatan wa qina 'adhaban-nar",
        translation_fr: "Seigneur, accorde-nous belle part ici-bas et belle part dans l'au-delà, et protège-nous du châtiment du Feu.",
        source: "Coran 2:201",
        category: DuaCategory::General,
        repeat_count: None,
    },
];

/// All duas of a category, in declaration order.
pub fn duas_for(category: DuaCategory) -> Vec<&'static Dua> {
    DUAS.iter().filter(|d| d.category == category).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_with_data_resolves() {
        assert_eq!(duas_for(DuaCategory::Iftar).len(), 2);
        assert_eq!(duas_for(DuaCategory::LaylatAlQadr).len(), 1);
        assert!(!duas_for(DuaCategory::General).is_empty());
    }

    #[test]
    fn entries_are_complete() {
        for dua in DUAS {
            assert!(!dua.text_ar.is_empty());
            assert!(!dua.translation_fr.is_empty());
            assert!(!dua.source.is_empty());
        }
    }
}
