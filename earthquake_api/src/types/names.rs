//! Open name enumerations advertised by the service: catalogs, contributors,
//! event types, magnitude types and product types.
//!
//! The service adds values over time, so each is a string newtype with
//! constants for the values known when this crate was written rather than a
//! closed `enum`. Any other value can be built with `From<&str>`.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            pub const fn from_static(value: &'static str) -> Self {
                Self(Cow::Borrowed(value))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(Cow::Owned(value.to_string()))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Cow::Owned(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

name_type!(
    /// Data-contributing network whose naming convention an event follows.
    Catalog
);
name_type!(
    /// Organisation that submitted an event record.
    Contributor
);
name_type!(
    /// Kind of seismic (or non-seismic) event.
    EventType
);
name_type!(MagnitudeType);
name_type!(
    /// Kind of product associated with an event (shakemap, dyfi, ...).
    ProductType
);

impl Catalog {
    pub const AK: Catalog = Catalog::from_static("ak");
    pub const AT: Catalog = Catalog::from_static("at");
    pub const ATLAS: Catalog = Catalog::from_static("atlas");
    pub const AV: Catalog = Catalog::from_static("av");
    pub const CGS: Catalog = Catalog::from_static("cgs");
    pub const CHOY: Catalog = Catalog::from_static("choy");
    pub const CI: Catalog = Catalog::from_static("ci");
    pub const DR: Catalog = Catalog::from_static("dr");
    pub const DUPUTEL: Catalog = Catalog::from_static("duputel");
    pub const EW_DM: Catalog = Catalog::from_static("ew_dm");
    pub const GCMT: Catalog = Catalog::from_static("gcmt");
    pub const GSC: Catalog = Catalog::from_static("gsc");
    pub const HV: Catalog = Catalog::from_static("hv");
    pub const ID: Catalog = Catalog::from_static("id");
    pub const IS: Catalog = Catalog::from_static("is");
    pub const ISCGEM: Catalog = Catalog::from_static("iscgem");
    pub const ISCGEMSUP: Catalog = Catalog::from_static("iscgemsup");
    pub const ISMPKANSAS: Catalog = Catalog::from_static("ismpkansas");
    pub const LD: Catalog = Catalog::from_static("ld");
    pub const MB: Catalog = Catalog::from_static("mb");
    pub const NC: Catalog = Catalog::from_static("nc");
    pub const NE: Catalog = Catalog::from_static("ne");
    pub const NM: Catalog = Catalog::from_static("nm");
    pub const NN: Catalog = Catalog::from_static("nn");
    pub const OFFICIAL: Catalog = Catalog::from_static("official");
    pub const OK: Catalog = Catalog::from_static("ok");
    pub const PR: Catalog = Catalog::from_static("pr");
    pub const PT: Catalog = Catalog::from_static("pt");
    pub const SC: Catalog = Catalog::from_static("sc");
    pub const SE: Catalog = Catalog::from_static("se");
    pub const UNKNOWN: Catalog = Catalog::from_static("unknown");
    pub const US: Catalog = Catalog::from_static("us");
    pub const USHIS: Catalog = Catalog::from_static("ushis");
    pub const UU: Catalog = Catalog::from_static("uu");
    pub const UW: Catalog = Catalog::from_static("uw");
}

impl Contributor {
    pub const ADMIN: Contributor = Contributor::from_static("admin");
    pub const AK: Contributor = Contributor::from_static("ak");
    pub const AT: Contributor = Contributor::from_static("at");
    pub const ATLAS: Contributor = Contributor::from_static("atlas");
    pub const AV: Contributor = Contributor::from_static("av");
    pub const CGS: Contributor = Contributor::from_static("cgs");
    pub const CI: Contributor = Contributor::from_static("ci");
    pub const EW: Contributor = Contributor::from_static("ew");
    pub const HV: Contributor = Contributor::from_static("hv");
    pub const ISMP: Contributor = Contributor::from_static("ismp");
    pub const LD: Contributor = Contributor::from_static("ld");
    pub const MB: Contributor = Contributor::from_static("mb");
    pub const NC: Contributor = Contributor::from_static("nc");
    pub const NM: Contributor = Contributor::from_static("nm");
    pub const NN: Contributor = Contributor::from_static("nn");
    pub const NP: Contributor = Contributor::from_static("np");
    pub const OFFICIAL: Contributor = Contributor::from_static("official");
    pub const OK: Contributor = Contributor::from_static("ok");
    pub const PR: Contributor = Contributor::from_static("pr");
    pub const PT: Contributor = Contributor::from_static("pt");
    pub const SE: Contributor = Contributor::from_static("se");
    pub const US: Contributor = Contributor::from_static("us");
    pub const UU: Contributor = Contributor::from_static("uu");
    pub const UW: Contributor = Contributor::from_static("uw");
}

impl EventType {
    pub const ACOUSTIC_NOISE: EventType = EventType::from_static("acoustic noise");
    pub const ANTHROPOGENIC_EVENT: EventType = EventType::from_static("anthropogenic_event");
    pub const BUILDING_COLLAPSE: EventType = EventType::from_static("building collapse");
    pub const CHEMICAL_EXPLOSION: EventType = EventType::from_static("chemical explosion");
    pub const COLLAPSE: EventType = EventType::from_static("collapse");
    pub const EARTHQUAKE: EventType = EventType::from_static("earthquake");
    pub const EQ: EventType = EventType::from_static("eq");
    pub const EXPERIMENTAL_EXPLOSION: EventType = EventType::from_static("experimental explosion");
    pub const EXPLOSION: EventType = EventType::from_static("explosion");
    pub const ICE_QUAKE: EventType = EventType::from_static("ice quake");
    pub const INDUCED_OR_TRIGGERED_EVENT: EventType =
        EventType::from_static("induced or triggered event");
    pub const LANDSLIDE: EventType = EventType::from_static("landslide");
    pub const METEOR: EventType = EventType::from_static("meteor");
    pub const METEORITE: EventType = EventType::from_static("meteorite");
    pub const MINE_COLLAPSE: EventType = EventType::from_static("mine collapse");
    pub const MINING_EXPLOSION: EventType = EventType::from_static("mining explosion");
    pub const NOT_REPORTED: EventType = EventType::from_static("not reported");
    pub const NUCLEAR_EXPLOSION: EventType = EventType::from_static("nuclear explosion");
    pub const OTHER_EVENT: EventType = EventType::from_static("other event");
    pub const QUARRY: EventType = EventType::from_static("quarry");
    pub const QUARRY_BLAST: EventType = EventType::from_static("quarry blast");
    pub const ROCK_BURST: EventType = EventType::from_static("rock burst");
    pub const ROCK_SLIDE: EventType = EventType::from_static("Rock Slide");
    pub const ROCKSLIDE: EventType = EventType::from_static("rockslide");
    pub const SNOW_AVALANCHE: EventType = EventType::from_static("snow_avalanche");
    pub const SONIC_BOOM: EventType = EventType::from_static("sonic boom");
    pub const SONICBOOM: EventType = EventType::from_static("sonicboom");
    pub const VOLCANIC_ERUPTION: EventType = EventType::from_static("volcanic eruption");
    pub const VOLCANIC_EXPLOSION: EventType = EventType::from_static("volcanic explosion");
}

impl MagnitudeType {
    pub const FA: MagnitudeType = MagnitudeType::from_static("fa");
    pub const H: MagnitudeType = MagnitudeType::from_static("H");
    pub const LG: MagnitudeType = MagnitudeType::from_static("lg");
    pub const M: MagnitudeType = MagnitudeType::from_static("m");
    pub const MA: MagnitudeType = MagnitudeType::from_static("ma");
    pub const MB: MagnitudeType = MagnitudeType::from_static("mb");
    pub const MBLG: MagnitudeType = MagnitudeType::from_static("MbLg");
    pub const MB_LG: MagnitudeType = MagnitudeType::from_static("mb_lg");
    pub const MC: MagnitudeType = MagnitudeType::from_static("mc");
    pub const MD: MagnitudeType = MagnitudeType::from_static("Md");
    pub const MDL: MagnitudeType = MagnitudeType::from_static("mdl");
    pub const ME: MagnitudeType = MagnitudeType::from_static("Me");
    pub const MFA: MagnitudeType = MagnitudeType::from_static("mfa");
    pub const MH: MagnitudeType = MagnitudeType::from_static("mh");
    pub const MI: MagnitudeType = MagnitudeType::from_static("Mi");
    pub const ML: MagnitudeType = MagnitudeType::from_static("ml");
    pub const MLG: MagnitudeType = MagnitudeType::from_static("mlg");
    pub const MLR: MagnitudeType = MagnitudeType::from_static("mlr");
    pub const MS: MagnitudeType = MagnitudeType::from_static("Ms");
    pub const MS_20: MagnitudeType = MagnitudeType::from_static("ms_20");
    pub const MT: MagnitudeType = MagnitudeType::from_static("Mt");
    pub const MUN: MagnitudeType = MagnitudeType::from_static("mun");
    pub const MW: MagnitudeType = MagnitudeType::from_static("mw");
    pub const MWB: MagnitudeType = MagnitudeType::from_static("mwb");
    pub const MWC: MagnitudeType = MagnitudeType::from_static("mwc");
    pub const MWP: MagnitudeType = MagnitudeType::from_static("mwp");
    pub const MWR: MagnitudeType = MagnitudeType::from_static("mwr");
    pub const MWW: MagnitudeType = MagnitudeType::from_static("mww");
    pub const NO: MagnitudeType = MagnitudeType::from_static("no");
    pub const UK: MagnitudeType = MagnitudeType::from_static("uk");
    pub const UNKNOWN: MagnitudeType = MagnitudeType::from_static("Unknown");
}

impl ProductType {
    pub const ASSOCIATE: ProductType = ProductType::from_static("associate");
    pub const CAP: ProductType = ProductType::from_static("cap");
    pub const DISASSOCIATE: ProductType = ProductType::from_static("disassociate");
    pub const DYFI: ProductType = ProductType::from_static("dyfi");
    pub const EQ_LOCATION_MAP: ProductType = ProductType::from_static("eq-location-map");
    pub const FINITE_FAULT: ProductType = ProductType::from_static("finite-fault");
    pub const FOCAL_MECHANISM: ProductType = ProductType::from_static("focal-mechanism");
    pub const GENERAL_HEADER: ProductType = ProductType::from_static("general-header");
    pub const GENERAL_LINK: ProductType = ProductType::from_static("general-link");
    pub const GENERAL_TEXT: ProductType = ProductType::from_static("general-text");
    pub const GEOSERVE: ProductType = ProductType::from_static("geoserve");
    pub const GROUND_FAILURE: ProductType = ProductType::from_static("ground-failure");
    pub const HISTORICAL_MOMENT_TENSOR_MAP: ProductType =
        ProductType::from_static("historical-moment-tensor-map");
    pub const HISTORICAL_SEISMICITY_MAP: ProductType =
        ProductType::from_static("historical-seismicity-map");
    pub const IMAGE: ProductType = ProductType::from_static("image");
    pub const IMPACT_LINK: ProductType = ProductType::from_static("impact-link");
    pub const IMPACT_TEXT: ProductType = ProductType::from_static("impact-text");
    pub const ISOSEISMAL_MAP: ProductType = ProductType::from_static("isoseismal-map");
    pub const LOSSPAGER: ProductType = ProductType::from_static("losspager");
    pub const MOMENT_TENSOR: ProductType = ProductType::from_static("moment-tensor");
    pub const MOREINFORMATION: ProductType = ProductType::from_static("moreinformation");
    pub const NEARBY_CITIES: ProductType = ProductType::from_static("nearby-cities");
    pub const OAF: ProductType = ProductType::from_static("oaf");
    pub const ORIGIN: ProductType = ProductType::from_static("origin");
    pub const P_WAVE_TRAVEL_TIMES: ProductType = ProductType::from_static("p-wave-travel-times");
    pub const PHASE_DATA: ProductType = ProductType::from_static("phase-data");
    pub const POSTER: ProductType = ProductType::from_static("poster");
    pub const SCITECH_LINK: ProductType = ProductType::from_static("scitech-link");
    pub const SCITECH_TEXT: ProductType = ProductType::from_static("scitech-text");
    pub const SHAKEMAP: ProductType = ProductType::from_static("shakemap");
    pub const SIGNIFICANCE: ProductType = ProductType::from_static("significance");
    pub const TECTONIC_SUMMARY: ProductType = ProductType::from_static("tectonic-summary");
    pub const TOUCH: ProductType = ProductType::from_static("touch");
    pub const TRUMP: ProductType = ProductType::from_static("trump");
    pub const TRUMP_CAP: ProductType = ProductType::from_static("trump-cap");
    pub const TRUMP_DYFI: ProductType = ProductType::from_static("trump-dyfi");
    pub const TRUMP_GENERAL_LINK: ProductType = ProductType::from_static("trump-general-link");
    pub const TRUMP_GENERAL_TEXT: ProductType = ProductType::from_static("trump-general-text");
    pub const TRUMP_GEOSERVE: ProductType = ProductType::from_static("trump-geoserve");
    pub const TRUMP_GROUND_FAILURE: ProductType = ProductType::from_static("trump-ground-failure");
    pub const TRUMP_IMPACT_TEXT: ProductType = ProductType::from_static("trump-impact-text");
    pub const TRUMP_LOSSPAGER: ProductType = ProductType::from_static("trump-losspager");
    pub const TRUMP_MOMENT_TENSOR: ProductType = ProductType::from_static("trump-moment-tensor");
    pub const TRUMP_NEARBY_CITIES: ProductType = ProductType::from_static("trump-nearby-cities");
    pub const TRUMP_ORIGIN: ProductType = ProductType::from_static("trump-origin");
    pub const TRUMP_PHASE_DATA: ProductType = ProductType::from_static("trump-phase-data");
    pub const TRUMP_SHAKEMAP: ProductType = ProductType::from_static("trump-shakemap");
    pub const TRUMP_TECTONIC_SUMMARY: ProductType =
        ProductType::from_static("trump-tectonic-summary");
    pub const UNASSOCIATED_AMPLITUDE: ProductType =
        ProductType::from_static("unassociated-amplitude");
}
