//! Static district lookup for pickup and drop points.
//!
//! Pickup and drop points are only meaningful relative to a district; the
//! table is read-only and sorted by district name.

/// Pickup and drop points served within one district.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictPoints {
    /// District name.
    pub name:   &'static str,
    /// Collection points.
    pub pickup: &'static [&'static str],
    /// Hand-off points.
    pub drop:   &'static [&'static str],
}

/// All districts, sorted by name.
pub static DISTRICTS: &[DistrictPoints] = &[
    DistrictPoints {
        name:   "Ariyalur",
        pickup: &["Ariyalur Bus Stand", "Udayarpalayam", "Sendurai"],
        drop:   &["Ariyalur Town", "Jayankondam", "Andimadam"],
    },
    DistrictPoints {
        name:   "Chengalpattu",
        pickup: &["Chengalpattu Station", "Tambaram", "Madurantakam"],
        drop:   &["GST Road", "Urapakkam", "Vandalur"],
    },
    DistrictPoints {
        name:   "Chennai",
        pickup: &["Koyambedu", "Central Railway Station", "Tambaram"],
        drop:   &["T. Nagar", "Velachery", "Adyar"],
    },
    DistrictPoints {
        name:   "Coimbatore",
        pickup: &["Gandhipuram", "Peelamedu", "Ukkadam"],
        drop:   &["RS Puram", "Saibaba Colony", "Singanallur"],
    },
    DistrictPoints {
        name:   "Cuddalore",
        pickup: &["Cuddalore Port", "Chidambaram", "Vridhachalam"],
        drop:   &["Cuddalore Town", "Panruti", "Kattumannarkoil"],
    },
    DistrictPoints {
        name:   "Dharmapuri",
        pickup: &["Dharmapuri Bus Stand", "Harur", "Palacode"],
        drop:   &["Dharmapuri Town", "Pennagaram", "Karimangalam"],
    },
    DistrictPoints {
        name:   "Dindigul",
        pickup: &["Dindigul Junction", "Palani", "Kodaikanal Road"],
        drop:   &["Dindigul Town", "Natham", "Vedasandur"],
    },
    DistrictPoints {
        name:   "Erode",
        pickup: &["Erode Junction", "Bhavani", "Gobichettipalayam"],
        drop:   &["Erode Town", "Sathyamangalam", "Anthiyur"],
    },
    DistrictPoints {
        name:   "Kallakurichi",
        pickup: &["Kallakurichi Bus Stand", "Sankarapuram", "Tirukoilur"],
        drop:   &["Kallakurichi Town", "Ulundurpet", "Chinnaselam"],
    },
    DistrictPoints {
        name:   "Kancheepuram",
        pickup: &["Kancheepuram Station", "Sriperumbudur", "Uthiramerur"],
        drop:   &["Kancheepuram Town", "Walajabad", "Cheyyur"],
    },
    DistrictPoints {
        name:   "Kanyakumari",
        pickup: &["Nagercoil Junction", "Kanyakumari", "Marthandam"],
        drop:   &["Nagercoil Town", "Thuckalay", "Colachel"],
    },
    DistrictPoints {
        name:   "Karur",
        pickup: &["Karur Bus Stand", "Kulithalai", "Krishnarayapuram"],
        drop:   &["Karur Town", "Aravakurichi", "Manmangalam"],
    },
    DistrictPoints {
        name:   "Krishnagiri",
        pickup: &["Krishnagiri Bus Stand", "Hosur", "Dharmapuri Road"],
        drop:   &["Krishnagiri Town", "Pochampalli", "Uthangarai"],
    },
    DistrictPoints {
        name:   "Madurai",
        pickup: &["Mattuthavani", "Periyar Bus Stand", "Thirunagar"],
        drop:   &["Anna Nagar", "Tallakulam", "KK Nagar"],
    },
    DistrictPoints {
        name:   "Mayiladuthurai",
        pickup: &["Mayiladuthurai Junction", "Sirkazhi", "Poompuhar"],
        drop:   &["Mayiladuthurai Town", "Kuthalam", "Tharangambadi"],
    },
    DistrictPoints {
        name:   "Nagapattinam",
        pickup: &["Nagapattinam Port", "Vedaranyam", "Thiruvarur Road"],
        drop:   &["Nagapattinam Town", "Karaikal", "Kilvelur"],
    },
    DistrictPoints {
        name:   "Namakkal",
        pickup: &["Namakkal Bus Stand", "Rasipuram", "Tiruchengode"],
        drop:   &["Namakkal Town", "Komarapalayam", "Paramathi Velur"],
    },
    DistrictPoints {
        name:   "Nilgiris",
        pickup: &["Ooty Bus Stand", "Coonoor", "Kotagiri"],
        drop:   &["Ooty Town", "Wellington", "Gudalur"],
    },
    DistrictPoints {
        name:   "Perambalur",
        pickup: &["Perambalur Bus Stand", "Kunnam", "Alathur"],
        drop:   &["Perambalur Town", "Veppanthattai", "Valikandapuram"],
    },
    DistrictPoints {
        name:   "Pudukkottai",
        pickup: &["Pudukkottai Bus Stand", "Aranthangi", "Kulathur"],
        drop:   &["Pudukkottai Town", "Thirumayam", "Gandarvakottai"],
    },
    DistrictPoints {
        name:   "Ramanathapuram",
        pickup: &["Ramanathapuram Bus Stand", "Rameswaram", "Mudukulathur"],
        drop:   &["Ramanathapuram Town", "Mandapam", "Paramakudi"],
    },
    DistrictPoints {
        name:   "Ranipet",
        pickup: &["Ranipet Bus Stand", "Arcot", "Walajah"],
        drop:   &["Ranipet Town", "Nemili", "Thimiri"],
    },
    DistrictPoints {
        name:   "Salem",
        pickup: &["New Bus Stand", "Shevapet", "Fairlands"],
        drop:   &["Hastampatti", "Suramangalam", "Ammapet"],
    },
    DistrictPoints {
        name:   "Sivaganga",
        pickup: &["Sivaganga Bus Stand", "Karaikudi", "Devakottai"],
        drop:   &["Sivaganga Town", "Tiruppattur", "Manamadurai"],
    },
    DistrictPoints {
        name:   "Tenkasi",
        pickup: &["Tenkasi Junction", "Sankarankovil", "Kadayanallur"],
        drop:   &["Tenkasi Town", "Alangulam", "Veerakeralampudur"],
    },
    DistrictPoints {
        name:   "Thanjavur",
        pickup: &["Thanjavur Junction", "Kumbakonam", "Thiruvidaimarudur"],
        drop:   &["Thanjavur Town", "Orathanadu", "Papanasam"],
    },
    DistrictPoints {
        name:   "Theni",
        pickup: &["Theni Bus Stand", "Periyakulam", "Uthamapalayam"],
        drop:   &["Theni Town", "Bodinayakanur", "Andipatti"],
    },
    DistrictPoints {
        name:   "Thoothukudi",
        pickup: &["Thoothukudi Port", "Kovilpatti", "Vilathikulam"],
        drop:   &["Thoothukudi Town", "Sathankulam", "Ottapidaram"],
    },
    DistrictPoints {
        name:   "Tiruchirappalli",
        pickup: &["Central Bus Stand", "Srirangam", "Thillai Nagar"],
        drop:   &["Cantonment", "Tennur", "Woraiyur"],
    },
    DistrictPoints {
        name:   "Tirunelveli",
        pickup: &["Tirunelveli Junction", "Palayamkottai", "Ambasamudram"],
        drop:   &["Tirunelveli Town", "Kallidaikurichi", "Radhapuram"],
    },
    DistrictPoints {
        name:   "Tirupattur",
        pickup: &["Tirupattur Bus Stand", "Vaniyambadi", "Ambur"],
        drop:   &["Tirupattur Town", "Natrampalli", "Jolarpet"],
    },
    DistrictPoints {
        name:   "Tiruvallur",
        pickup: &["Tiruvallur Bus Stand", "Ponneri", "Gummidipoondi"],
        drop:   &["Tiruvallur Town", "Poonamallee", "Avadi"],
    },
    DistrictPoints {
        name:   "Tiruvannamalai",
        pickup: &["Tiruvannamalai Bus Stand", "Polur", "Arani"],
        drop:   &["Tiruvannamalai Town", "Chengam", "Vandavasi"],
    },
    DistrictPoints {
        name:   "Tiruvarur",
        pickup: &["Tiruvarur Bus Stand", "Mannargudi", "Nannilam"],
        drop:   &["Tiruvarur Town", "Thiruthuraipoondi", "Kodavasal"],
    },
    DistrictPoints {
        name:   "Vellore",
        pickup: &["Vellore Bus Stand", "Katpadi Junction", "Gudiyatham"],
        drop:   &["Vellore Town", "Saidapet", "Pernambut"],
    },
    DistrictPoints {
        name:   "Viluppuram",
        pickup: &["Viluppuram Junction", "Tindivanam", "Gingee"],
        drop:   &["Viluppuram Town", "Mailam", "Vikravandi"],
    },
    DistrictPoints {
        name:   "Virudhunagar",
        pickup: &["Virudhunagar Junction", "Sivakasi", "Srivilliputhur"],
        drop:   &["Virudhunagar Town", "Rajapalayam", "Watrap"],
    },
];

/// Looks up a district by exact name.
#[must_use]
pub fn lookup(district: &str) -> Option<&'static DistrictPoints> {
    DISTRICTS
        .binary_search_by(|entry| entry.name.cmp(district))
        .ok()
        .map(|idx| &DISTRICTS[idx])
}

/// District names in sorted order.
#[must_use]
pub fn district_names() -> Vec<&'static str> {
    DISTRICTS.iter().map(|d| d.name).collect()
}

/// Pickup points for a district; empty for an unknown district.
#[must_use]
pub fn pickup_points(district: &str) -> &'static [&'static str] {
    lookup(district).map(|d| d.pickup).unwrap_or_default()
}

/// Drop points for a district; empty for an unknown district.
#[must_use]
pub fn drop_points(district: &str) -> &'static [&'static str] {
    lookup(district).map(|d| d.drop).unwrap_or_default()
}

#[must_use]
pub fn contains_district(district: &str) -> bool {
    lookup(district).is_some()
}

#[must_use]
pub fn is_pickup_point(district: &str, point: &str) -> bool {
    pickup_points(district).iter().any(|p| *p == point)
}

#[must_use]
pub fn is_drop_point(district: &str, point: &str) -> bool {
    drop_points(district).iter().any(|p| *p == point)
}
