//! Copy and lookup tables for the landing page. Everything here is authored
//! once and only read at render time.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Leaf,
    Droplets,
    Wind,
    BarChart,
    Calendar,
    MapPin,
    CheckCircle,
    ArrowRight,
    ShieldCheck,
    Zap,
    Phone,
    Mail,
    Menu,
    Close,
    Plus,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub tag: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProcessStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Benefit {
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Problem {
    pub icon: Icon,
    pub title: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompanyValue {
    pub label: &'static str,
    pub sub: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// A photo shipped with the site. `file` lives in the asset directory,
/// `fallback` is shown when the local file fails to load.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageAsset {
    pub file: &'static str,
    pub fallback: &'static str,
    pub alt: &'static str,
}

pub const BRAND: &str = "TerraVent";
pub const PHONE: &str = "+46 (0) 33 123 45 67";
pub const CONTACT_EMAIL: &str = "contact@terravent.se";
pub const INFO_EMAIL: &str = "info@terravent.se";
pub const ADDRESS: &str = "Västgötagatan 12, 504 41 Borås, Sweden";
pub const SERVICE_AREA: &str =
    "Service Area: Southern Sweden (Västra Götaland, Skåne, Halland, Småland)";
pub const BOOKING_HREF: &str = "#booking";

pub const HERO_LEAD: &str = "Restore your soil structure without destructive repeated tillage. We bring Pneumatic Soil Fracturing (PSF) to Southern Sweden—a proven, service-based model for healthier roots and higher yields.";

pub const NAV_LINKS: [NavEntry; 5] = [
    NavEntry { label: "Services", href: "#services" },
    NavEntry { label: "How it works", href: "#process" },
    NavEntry { label: "Results", href: "#benefits" },
    NavEntry { label: "About", href: "#about" },
    NavEntry { label: "FAQ", href: "#faq" },
];

pub const HERO_IMAGE: ImageAsset = ImageAsset {
    file: "hero-soil.jpg",
    fallback: "https://picsum.photos/seed/soil/800/600",
    alt: "Farmer examining healthy soil",
};

pub const MACHINERY_IMAGE: ImageAsset = ImageAsset {
    file: "psf-machinery.jpg",
    fallback: "https://picsum.photos/seed/tractor1/400/500",
    alt: "PSF Machinery",
};

pub const ANALYSIS_IMAGE: ImageAsset = ImageAsset {
    file: "soil-analysis.jpg",
    fallback: "https://picsum.photos/seed/tractor2/400/500",
    alt: "Soil Analysis",
};

pub const HARVEST_IMAGE: ImageAsset = ImageAsset {
    file: "harvest.jpg",
    fallback: "https://picsum.photos/seed/harvest/800/800",
    alt: "Bumper crop harvest",
};

pub const PROBLEMS: [Problem; 3] = [
    Problem {
        icon: Icon::Droplets,
        title: "Poor Infiltration",
        text: "Water stays on the surface, causing standing pools or rapid runoff that carries away valuable topsoil.",
    },
    Problem {
        icon: Icon::Wind,
        title: "Oxygen Starvation",
        text: "When soil pores close, microbial activity drops and roots literally suffocate, stunting plant growth.",
    },
    Problem {
        icon: Icon::BarChart,
        title: "Yield Plateau",
        text: "No matter how much fertilizer you add, compacted layers block root access to deep nutrients, capping your yields.",
    },
];

pub const PSF_POINTS: [&str; 4] = [
    "Minimal surface disruption — no need to re-seed or re-till.",
    "Long-term results — treatments last for years, not just one season.",
    "Localized precision — we treat the problem, not the whole field if not needed.",
    "Sustainable practice — restores soil health and reduces the need for aggressive tillage.",
];

pub const SERVICES: [ServiceDescriptor; 5] = [
    ServiceDescriptor {
        title: "Online Booking & Consultation",
        description: "Simple digital scheduling. Talk to an expert to assess your field needs before we even arrive.",
        icon: Icon::Calendar,
        tag: None,
    },
    ServiceDescriptor {
        title: "Soil Analysis & Targeted Mapping",
        description: "We use penetrometers to find exact compacted spots. You only pay for treating the areas that need it.",
        icon: Icon::MapPin,
        tag: None,
    },
    ServiceDescriptor {
        title: "PSF Service Delivery",
        description: "Our experienced operators handle the pneumatic fracturing with precision and care.",
        icon: Icon::Wind,
        tag: None,
    },
    ServiceDescriptor {
        title: "Monitoring & Follow-up",
        description: "Post-service soil health monitoring to track improvement and plan future maintenance cycles.",
        icon: Icon::BarChart,
        tag: None,
    },
    ServiceDescriptor {
        title: "Biochar Injection",
        description: "Directly inject biochar into fractured layers to lock in carbon and improve nutrient retention.",
        icon: Icon::ShieldCheck,
        tag: Some("Optional Add-on"),
    },
];

pub const PROCESS_STEPS: [ProcessStep; 5] = [
    ProcessStep {
        number: 1,
        title: "Book Consultation",
        description: "Select a time online or give us a call to discuss your farm.",
        icon: Icon::Calendar,
    },
    ProcessStep {
        number: 2,
        title: "Share Field Details",
        description: "Provide location, hectares, and symptoms you've noticed.",
        icon: Icon::MapPin,
    },
    ProcessStep {
        number: 3,
        title: "On-site Analysis",
        description: "We measure compaction levels and map the treatment zones.",
        icon: Icon::BarChart,
    },
    ProcessStep {
        number: 4,
        title: "PSF Treatment",
        description: "Our specialized equipment restores your soil structure.",
        icon: Icon::Wind,
    },
    ProcessStep {
        number: 5,
        title: "Results & Monitoring",
        description: "Get feedback and optional long-term health monitoring.",
        icon: Icon::CheckCircle,
    },
];

pub const BENEFITS: [Benefit; 5] = [
    Benefit {
        title: "Dramatic Drainage Improvement",
        text: "Eliminate standing water and reduce surface runoff within days of treatment.",
    },
    Benefit {
        title: "Healthier, Deeper Roots",
        text: "Roots can finally reach water and nutrients in the subsoil layers previously blocked by compaction.",
    },
    Benefit {
        title: "No Equipment Investment",
        text: "Get the latest ag-tech without the massive capital outlay or maintenance headaches.",
    },
    Benefit {
        title: "Less Fuel, Less Time",
        text: "Reduced need for repeated deep tillage over time saves you money on every pass.",
    },
    Benefit {
        title: "Sustainability First",
        text: "Better infiltration reduces nitrogen runoff and improves your farm's environmental footprint.",
    },
];

pub const VALUES: [CompanyValue; 4] = [
    CompanyValue { label: "Safety", sub: "Priority #1" },
    CompanyValue { label: "Performance", sub: "Proven Results" },
    CompanyValue { label: "Environment", sub: "Positive Impact" },
    CompanyValue { label: "Transparency", sub: "Fair Pricing" },
];

pub const PARTNERS: [&str; 5] = [
    "Lister Wilder",
    "Airter UK",
    "SLU Sweden",
    "Nycander AB",
    "Jordbruksverket",
];

/// First entry is the placeholder shown before a choice is made.
pub const SOIL_CONCERNS: [&str; 6] = [
    "Select an issue...",
    "Standing Water / Drainage",
    "Low Crop Yield",
    "Severe Surface Runoff",
    "Restricted Root Growth",
    "Other",
];

pub const CONTACT_METHODS: [&str; 2] = ["Phone", "Email"];

pub const FAQ_ENTRIES: [FaqEntry; 8] = [
    FaqEntry {
        question: "What is PSF and how is it different from ploughing?",
        answer: "Pneumatic Soil Fracturing (PSF) uses high-pressure air bursts injected deep into the subsoil. Unlike ploughing, which turns over the top layer and can actually cause further compaction below, PSF creates a network of fissures throughout the soil profile without destroying its natural structure or ecosystem.",
    },
    FaqEntry {
        question: "How long do the results last?",
        answer: "Because we address the root cause of deep compaction, a single treatment typically lasts 5–10 years, depending on your soil type and farm management practices.",
    },
    FaqEntry {
        question: "Will it damage my existing crops or soil life?",
        answer: "No. PSF is non-destructive. The air injections are localized and do not disturb the surface roots or beneficial soil biology like traditional heavy tillage would.",
    },
    FaqEntry {
        question: "When is the best season to perform PSF?",
        answer: "The best results are achieved when soil moisture is low to moderate (Late Summer to Autumn), as this allows for maximum fracturing. However, we can operate in various windows depending on your crop rotation.",
    },
    FaqEntry {
        question: "Do I need to buy any special equipment?",
        answer: "Not at all. TerraVent is a service-based business. We bring our specialized machinery and expert operators to your farm, so you get the benefits without the high capital investment.",
    },
    FaqEntry {
        question: "How do you know which areas of the field to treat?",
        answer: "We use advanced soil penetrometers and diagnostics to map your fields before treatment. This ensures we only apply PSF where it's actually needed, saving you time and cost.",
    },
    FaqEntry {
        question: "Can we reschedule due to extreme weather?",
        answer: "Yes. Soil condition is critical for the effectiveness of PSF. If the ground is too saturated, we will work with you to find the next optimal window.",
    },
    FaqEntry {
        question: "What information do you need before coming on-site?",
        answer: "Basic details like farm location, approximate field size, soil type (if known), and the specific symptoms you've noticed (e.g., standing water, stunted growth).",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_steps_are_numbered_in_order() {
        for (i, step) in PROCESS_STEPS.iter().enumerate() {
            assert_eq!(step.number as usize, i + 1, "step {}", step.title);
        }
    }

    #[test]
    fn only_biochar_is_tagged() {
        let tagged: Vec<_> = SERVICES.iter().filter(|s| s.tag.is_some()).collect();
        assert_eq!(tagged.len(), 1);
        assert_eq!(tagged[0].title, "Biochar Injection");
        assert_eq!(tagged[0].tag, Some("Optional Add-on"));
    }

    #[test]
    fn nav_links_point_at_page_fragments() {
        for link in NAV_LINKS.iter() {
            assert!(link.href.starts_with('#'), "{} -> {}", link.label, link.href);
        }
        assert!(BOOKING_HREF.starts_with('#'));
    }

    #[test]
    fn every_image_has_a_remote_fallback() {
        for image in [HERO_IMAGE, MACHINERY_IMAGE, ANALYSIS_IMAGE, HARVEST_IMAGE] {
            assert!(image.fallback.starts_with("https://"), "{}", image.file);
            assert!(!image.file.contains('/'), "{}", image.file);
            assert!(!image.alt.is_empty());
        }
    }

    #[test]
    fn psf_points_lead_with_a_dashed_heading() {
        let headings = [
            "Minimal surface disruption",
            "Long-term results",
            "Localized precision",
            "Sustainable practice",
        ];
        for (point, heading) in PSF_POINTS.iter().zip(headings) {
            assert!(point.starts_with(&format!("{} — ", heading)), "{}", point);
        }
    }

    #[test]
    fn hero_lead_keeps_its_dash() {
        assert!(HERO_LEAD.contains("Southern Sweden—a proven, service-based model"));
    }

    #[test]
    fn faq_entries_are_filled_in() {
        assert_eq!(FAQ_ENTRIES.len(), 8);
        for entry in FAQ_ENTRIES.iter() {
            assert!(entry.question.ends_with('?'), "{}", entry.question);
            assert!(!entry.answer.is_empty());
        }
    }
}
