//! Display labels for raw service and vehicle-size codes.

/// Label for a service code, falling back to [`humanize`] for unknown codes.
pub fn service_label(code: &str) -> String {
    known_service(code)
        .map(str::to_string)
        .unwrap_or_else(|| humanize(code))
}

/// Label for a vehicle-size code, falling back to [`humanize`] for unknown codes.
pub fn vehicle_size_label(code: &str) -> String {
    known_vehicle_size(code)
        .map(str::to_string)
        .unwrap_or_else(|| humanize(code))
}

/// `"light_pet_hair"` -> `"Light Pet Hair"`.
pub fn humanize(code: &str) -> String {
    code.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn known_service(code: &str) -> Option<&'static str> {
    let label = match code {
        "carpet_dry_detail" => "Carpet Dry Detail (Vacuum)",
        "headliner_stain_removal" => "Headliner Stain Removal",
        "interior_plastics_dry_detail" => "Interior Plastics Dry Detail",
        "interior_plastics_wet_detail" => "Interior Plastics Wet Detail/Protectants",
        "headliner_cleaning" => "Headliner Cleaning",
        "seats_wet_detail" => "Seats Wet Detail (Leather)",
        "seatbelts_detail" => "Seatbelts Detail",
        "seats_dry_detail" => "Seats Dry Detail (Vacuum)",
        "seats_shampoo" => "Seats Shampoo (Fabric)",
        "bug_tar_removal" => "Bug and Tar Removal",
        "claybar_wax" => "Claybar/Wax",
        "extreme_pet_hair_removal" => "Extreme Pet Hair Removal",
        "truckbed" => "Truckbed",
        "floors_dry_detail" => "Floors Dry Detail",
        "one_seat_stain_removal" => "1 Seat Stain Removal",
        "floors_wet_detail" => "Floors Wet Detail",
        "carpet_wet_detail" => "Carpet Wet Detail (Shampoo)",
        "exterior_handwash" => "Exterior Handwash and Windows",
        "light_pet_hair_removal" => "Light Pet Hair Removal",
        "tire_rim_detail" => "Tire and Rim Detail/Shine",
        _ => return None,
    };
    Some(label)
}

fn known_vehicle_size(code: &str) -> Option<&'static str> {
    let label = match code {
        "coupe_2_seater" => "Coupe (2-Seater)",
        "hatch_2_door" => "Hatchback (2-Door)",
        "hatch_4_door" => "Hatchback (4-Door)",
        "truck_2_seater" => "Truck (2-Seater)",
        "truck_4_seater" => "Truck (4-Seater)",
        "sedan_2_door" => "Sedan (2-Door)",
        "sedan_4_door" => "Sedan (4-Door)",
        "suv_4_seater" => "SUV (4-Seater)",
        "suv_6_seater" => "SUV (6-Seater)",
        "minivan_6_seater" => "Minivan (6-Seater)",
        _ => return None,
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_use_catalog() {
        assert_eq!(service_label("one_seat_stain_removal"), "1 Seat Stain Removal");
        assert_eq!(service_label("claybar_wax"), "Claybar/Wax");
        assert_eq!(vehicle_size_label("hatch_4_door"), "Hatchback (4-Door)");
    }

    #[test]
    fn unknown_codes_are_humanized() {
        assert_eq!(service_label("engine_bay_DEGREASE"), "Engine Bay Degrease");
        assert_eq!(vehicle_size_label("van_12_seater"), "Van 12 Seater");
    }

    #[test]
    fn humanize_handles_edges() {
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("completed"), "Completed");
        assert_eq!(humanize("__on_the__way"), "On The Way");
    }
}
