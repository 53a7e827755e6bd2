//! Status and packaging-format enums for lots.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lot lifecycle status.
///
/// Gates which sections of a lot are filled in; the calculations themselves
/// only look at it when aggregating finalized lots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LotStatus {
    #[default]
    #[serde(alias = "aberto")]
    Open,
    #[serde(alias = "em_producao")]
    InProduction,
    #[serde(alias = "finalizado")]
    Finalized,
}

impl LotStatus {
    pub const ALL: [Self; 3] = [Self::Open, Self::InProduction, Self::Finalized];
}

impl std::fmt::Display for LotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::InProduction => write!(f, "in_production"),
            Self::Finalized => write!(f, "finalized"),
        }
    }
}

impl std::str::FromStr for LotStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" | "aberto" => Ok(Self::Open),
            "in_production" | "em_producao" => Ok(Self::InProduction),
            "finalized" | "finalizado" => Ok(Self::Finalized),
            _ => Err(format!("invalid lot status: {s}")),
        }
    }
}

/// Packaging format of the fillet: 400 g or 800 g packets.
///
/// Each format has its own packet size and cost tables. A master box always
/// holds 9.6 kg: 24 light packets or 12 heavy ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FilletType {
    /// 400 g packets, 24 per box.
    #[default]
    #[serde(rename = "400g")]
    LightPack,
    /// 800 g packets, 12 per box.
    #[serde(rename = "800g")]
    HeavyPack,
}

impl FilletType {
    /// Packets that fill one master box.
    #[must_use]
    pub const fn packets_per_box(self) -> u32 {
        match self {
            Self::LightPack => 24,
            Self::HeavyPack => 12,
        }
    }

    /// Net weight of one packet in grams.
    #[must_use]
    pub const fn gram_weight(self) -> u32 {
        match self {
            Self::LightPack => 400,
            Self::HeavyPack => 800,
        }
    }

    /// Material cost of one empty packet.
    #[must_use]
    pub const fn per_packet_base_cost(self) -> Decimal {
        match self {
            // 0.4295
            Self::LightPack => Decimal::from_parts(4295, 0, 0, false, 4),
            // 0.5515
            Self::HeavyPack => Decimal::from_parts(5515, 0, 0, false, 4),
        }
    }

    /// Divisor turning a per-packet packaging cost into a per-kg one
    /// (before the `× 10` scale).
    #[must_use]
    pub const fn kg_divisor(self) -> u32 {
        match self {
            Self::LightPack => 4,
            Self::HeavyPack => 8,
        }
    }
}

impl std::fmt::Display for FilletType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LightPack => write!(f, "400g"),
            Self::HeavyPack => write!(f, "800g"),
        }
    }
}

impl std::str::FromStr for FilletType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "400g" | "light" => Ok(Self::LightPack),
            "800g" | "heavy" => Ok(Self::HeavyPack),
            _ => Err(format!("invalid fillet type: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_legacy_values() {
        let status: LotStatus = serde_json::from_str("\"finalizado\"").unwrap();
        assert_eq!(status, LotStatus::Finalized);
        let status: LotStatus = serde_json::from_str("\"em_producao\"").unwrap();
        assert_eq!(status, LotStatus::InProduction);
        let status: LotStatus = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(status, LotStatus::Open);
    }

    #[test]
    fn test_status_serializes_snake_case() {
        let json = serde_json::to_string(&LotStatus::InProduction).unwrap();
        assert_eq!(json, "\"in_production\"");
    }

    #[test]
    fn test_status_display_from_str() {
        for status in LotStatus::ALL {
            let parsed: LotStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("closed".parse::<LotStatus>().is_err());
    }

    #[test]
    fn test_fillet_type_tables() {
        assert_eq!(FilletType::LightPack.packets_per_box(), 24);
        assert_eq!(FilletType::LightPack.gram_weight(), 400);
        assert_eq!(FilletType::HeavyPack.packets_per_box(), 12);
        assert_eq!(FilletType::HeavyPack.gram_weight(), 800);
        assert_eq!(
            FilletType::LightPack.per_packet_base_cost(),
            "0.4295".parse::<Decimal>().unwrap()
        );
        assert_eq!(
            FilletType::HeavyPack.per_packet_base_cost(),
            "0.5515".parse::<Decimal>().unwrap()
        );
    }

    #[test]
    fn test_full_box_weighs_the_same_for_both_types() {
        for fillet in [FilletType::LightPack, FilletType::HeavyPack] {
            assert_eq!(fillet.packets_per_box() * fillet.gram_weight(), 9600);
        }
    }

    #[test]
    fn test_fillet_type_wire_format() {
        let fillet: FilletType = serde_json::from_str("\"800g\"").unwrap();
        assert_eq!(fillet, FilletType::HeavyPack);
        assert!(serde_json::from_str::<FilletType>("\"1kg\"").is_err());
        assert_eq!(FilletType::default(), FilletType::LightPack);
    }
}
