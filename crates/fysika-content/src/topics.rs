//! Topic catalog for the VWO-3 and VWO-4 physics curriculum.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Curriculum topic identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicId {
    // VWO-3
    ForcesNewton,
    EnergyWork,
    Power,
    MotionGraphs,
    DensityPressure,
    Circuits,
    // VWO-4
    Kinematics2d,
    ForcesDynamics,
    WorkEnergyPower,
    MomentumImpulse,
    CircularMotion,
    HarmonicMotion,
    DcCircuits,
    FieldsBasics,
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TopicId::ForcesNewton => "forces-newton",
            TopicId::EnergyWork => "energy-work",
            TopicId::Power => "power",
            TopicId::MotionGraphs => "motion-graphs",
            TopicId::DensityPressure => "density-pressure",
            TopicId::Circuits => "circuits",
            TopicId::Kinematics2d => "kinematics-2d",
            TopicId::ForcesDynamics => "forces-dynamics",
            TopicId::WorkEnergyPower => "work-energy-power",
            TopicId::MomentumImpulse => "momentum-impulse",
            TopicId::CircularMotion => "circular-motion",
            TopicId::HarmonicMotion => "harmonic-motion",
            TopicId::DcCircuits => "dc-circuits",
            TopicId::FieldsBasics => "fields-basics",
        };
        write!(f, "{s}")
    }
}

impl FromStr for TopicId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forces-newton" => Ok(TopicId::ForcesNewton),
            "energy-work" => Ok(TopicId::EnergyWork),
            "power" => Ok(TopicId::Power),
            "motion-graphs" => Ok(TopicId::MotionGraphs),
            "density-pressure" => Ok(TopicId::DensityPressure),
            "circuits" => Ok(TopicId::Circuits),
            "kinematics-2d" => Ok(TopicId::Kinematics2d),
            "forces-dynamics" => Ok(TopicId::ForcesDynamics),
            "work-energy-power" => Ok(TopicId::WorkEnergyPower),
            "momentum-impulse" => Ok(TopicId::MomentumImpulse),
            "circular-motion" => Ok(TopicId::CircularMotion),
            "harmonic-motion" => Ok(TopicId::HarmonicMotion),
            "dc-circuits" => Ok(TopicId::DcCircuits),
            "fields-basics" => Ok(TopicId::FieldsBasics),
            other => Err(format!("unknown topic: {other}")),
        }
    }
}

/// Display metadata for a topic.
#[derive(Debug, Clone)]
pub struct TopicInfo {
    pub id: TopicId,
    pub name: &'static str,
    pub dutch_name: &'static str,
    pub description: &'static str,
    /// VWO level the topic belongs to (3 or 4).
    pub level: u8,
}

/// The full topic catalog, VWO-3 topics first.
pub static TOPICS: &[TopicInfo] = &[
    TopicInfo {
        id: TopicId::ForcesNewton,
        name: "Forces & Newton's Laws",
        dutch_name: "Krachten en Newton's wetten",
        description: "Forces, friction, and Newton's three laws of motion.",
        level: 3,
    },
    TopicInfo {
        id: TopicId::EnergyWork,
        name: "Energy & Work",
        dutch_name: "Energie en arbeid",
        description: "Kinetic energy, potential energy, and the work-energy theorem.",
        level: 3,
    },
    TopicInfo {
        id: TopicId::Power,
        name: "Power",
        dutch_name: "Vermogen",
        description: "Power as the rate of energy transfer or work done per unit time.",
        level: 3,
    },
    TopicInfo {
        id: TopicId::MotionGraphs,
        name: "Motion Graphs",
        dutch_name: "Bewegingsdiagrammen",
        description: "Position-time, velocity-time, and acceleration-time graphs.",
        level: 3,
    },
    TopicInfo {
        id: TopicId::DensityPressure,
        name: "Density & Pressure",
        dutch_name: "Dichtheid en druk",
        description: "Density, pressure in fluids, and buoyancy.",
        level: 3,
    },
    TopicInfo {
        id: TopicId::Circuits,
        name: "Electric Circuits",
        dutch_name: "Elektrische schakelingen",
        description: "Series and parallel circuits with resistors, voltage, and current.",
        level: 3,
    },
    TopicInfo {
        id: TopicId::Kinematics2d,
        name: "Kinematics 2D",
        dutch_name: "Kinematica 2D",
        description: "Motion in two dimensions, vector decomposition, relative motion.",
        level: 4,
    },
    TopicInfo {
        id: TopicId::ForcesDynamics,
        name: "Forces & Dynamics",
        dutch_name: "Krachten en dynamica",
        description: "Newton's laws on inclined planes, friction, and circular motion.",
        level: 4,
    },
    TopicInfo {
        id: TopicId::WorkEnergyPower,
        name: "Work, Energy & Power",
        dutch_name: "Arbeid, energie en vermogen",
        description: "Work, energy conversions, and efficiency in real-world systems.",
        level: 4,
    },
    TopicInfo {
        id: TopicId::MomentumImpulse,
        name: "Momentum & Impulse",
        dutch_name: "Impuls en impulsmoment",
        description: "Conservation of momentum, impulse, one-dimensional collisions.",
        level: 4,
    },
    TopicInfo {
        id: TopicId::CircularMotion,
        name: "Circular Motion & Gravitation",
        dutch_name: "Cirkelbewegingen en gravitatie",
        description: "Centripetal acceleration and force, Newton's law of gravitation.",
        level: 4,
    },
    TopicInfo {
        id: TopicId::HarmonicMotion,
        name: "Simple Harmonic Motion",
        dutch_name: "Harmonische trillingen",
        description: "Oscillations, period, frequency, energy in mass-spring systems.",
        level: 4,
    },
    TopicInfo {
        id: TopicId::DcCircuits,
        name: "DC Circuits",
        dutch_name: "Gelijkstroomschakelingen",
        description: "Series and parallel circuits via Ohm's law and Kirchhoff's rules.",
        level: 4,
    },
    TopicInfo {
        id: TopicId::FieldsBasics,
        name: "Fields Basics",
        dutch_name: "Velden – basis",
        description: "Electric field strength, potential difference, field lines.",
        level: 4,
    },
];

/// Topics belonging to a VWO level.
pub fn topics_for_level(level: u8) -> impl Iterator<Item = &'static TopicInfo> {
    TOPICS.iter().filter(move |t| t.level == level)
}

impl TopicId {
    /// Catalog entry for this topic.
    pub fn info(&self) -> &'static TopicInfo {
        // The catalog covers every variant.
        TOPICS
            .iter()
            .find(|t| t.id == *self)
            .expect("topic missing from catalog")
    }
}
