//! Unit conversion
//!
//! Plans are computed in kg/ha; turf managers usually read g/m².
//! 1 kg/ha = 1000 g / 10 000 m² = 0.1 g/m².

const G_PER_M2_PER_KG_PER_HA: f64 = 0.1;

pub fn kg_per_ha_to_g_per_m2(kg_per_ha: f64) -> f64 {
    kg_per_ha * G_PER_M2_PER_KG_PER_HA
}

pub fn g_per_m2_to_kg_per_ha(g_per_m2: f64) -> f64 {
    g_per_m2 / G_PER_M2_PER_KG_PER_HA
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_conversion() {
        assert_relative_eq!(kg_per_ha_to_g_per_m2(200.0), 20.0);
        assert_relative_eq!(g_per_m2_to_kg_per_ha(2.5), 25.0);
    }
}
