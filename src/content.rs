//! Static page content: section identifiers and the copy tables the
//! section components iterate.
//!
//! Everything here is a compile-time literal; the page has no content
//! backend. Image URLs are external and treated as opaque.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// In-page navigation targets, in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionId {
    Home,
    Momentos,
    Receita,
    Jardim,
    Contato,
}

impl SectionId {
    /// All sections, in the order they appear on the page.
    pub const ALL: [Self; 5] = [
        Self::Home,
        Self::Momentos,
        Self::Receita,
        Self::Jardim,
        Self::Contato,
    ];

    /// The DOM id carried by the section element.
    #[must_use]
    pub fn dom_id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Momentos => "momentos",
            Self::Receita => "receita",
            Self::Jardim => "jardim",
            Self::Contato => "contato",
        }
    }

    /// Resolve a DOM id back to a section, if it names one.
    #[must_use]
    pub fn from_dom_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.dom_id() == id)
    }
}

/// Sections listed as plain links in the navigation bar. The hero is
/// reachable through the brand mark and the contact section through the
/// bar's own call-to-action.
pub const NAV_SECTIONS: [(SectionId, &str); 3] = [
    (SectionId::Momentos, "Momentos"),
    (SectionId::Receita, "Receita"),
    (SectionId::Jardim, "Jardim"),
];

// ── Hero ────────────────────────────────────────────────────────

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1449156001437-3a16d1daae39?auto=format&fit=crop&q=80&w=2000";

/// A headline number in the hero strip.
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const HERO_STATS: [Stat; 3] = [
    Stat { value: "10 min", label: "do centro de Domingos Martins" },
    Stat { value: "100m²", label: "na maior unidade do vale" },
    Stat { value: "2023", label: "recebendo famílias desde então" },
];

// ── Momentos ────────────────────────────────────────────────────

/// A framed photo in the "momentos" gallery.
pub struct GalleryItem {
    pub image_url: &'static str,
    pub caption: &'static str,
}

pub const GALLERY_ITEMS: [GalleryItem; 3] = [
    GalleryItem {
        image_url:
            "https://images.unsplash.com/photo-1542718610-a1d656d1884c?auto=format&fit=crop&q=80&w=800",
        caption: "Onde as ideias nascem",
    },
    GalleryItem {
        image_url:
            "https://images.unsplash.com/photo-1510076857177-7470076d4098?auto=format&fit=crop&q=80&w=800",
        caption: "Onde as histórias descansam",
    },
    GalleryItem {
        image_url:
            "https://images.unsplash.com/photo-1493809842364-78817add7ffb?auto=format&fit=crop&q=80&w=800",
        caption: "Onde a magia é construída",
    },
];

// ── Receita ─────────────────────────────────────────────────────

/// Icon drawn beside a process step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepIcon {
    Sparkles,
    Heart,
    Coffee,
}

/// One step of the "receita" process list.
pub struct ProcessStep {
    pub title: &'static str,
    pub detail: &'static str,
    pub icon: StepIcon,
}

pub const PROCESS_STEPS: [ProcessStep; 3] = [
    ProcessStep {
        title: "Escolha seus ingredientes",
        detail: "Terrenos selecionados onde o sol bate primeiro e a neblina descansa por último.",
        icon: StepIcon::Sparkles,
    },
    ProcessStep {
        title: "Misture com carinho",
        detail: "Arquitetura A-frame que respeita a inclinação da alma e da montanha.",
        icon: StepIcon::Heart,
    },
    ProcessStep {
        title: "Deixe assar na memória",
        detail: "Detalhes em madeira que absorvem o som do riso e o calor do café.",
        icon: StepIcon::Coffee,
    },
];

pub const RECIPE_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1470770841072-f978cf4d019e?auto=format&fit=crop&q=80&w=1000";

// ── Jardim ──────────────────────────────────────────────────────

/// Visual accent applied to a plan card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanAccent {
    Leaf,
    Sun,
    Wood,
}

impl PlanAccent {
    /// Modifier class for the card background.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Leaf => "garden-card--leaf",
            Self::Sun => "garden-card--sun",
            Self::Wood => "garden-card--wood",
        }
    }
}

/// One investment tier in the "jardim" section.
pub struct Plan {
    pub tag: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
    pub price: &'static str,
    pub accent: PlanAccent,
}

pub const PLANS: [Plan; 3] = [
    Plan {
        tag: "Foco: Rentabilidade",
        title: "A Muda",
        detail: "Plano de entrada para investidores que buscam rentabilidade com o charme A-frame.",
        price: "R$ 166k",
        accent: PlanAccent::Leaf,
    },
    Plan {
        tag: "Mais Popular",
        title: "Árvore Frutífera",
        detail: "O equilíbrio perfeito entre refúgio próprio e alto rendimento em locações premium.",
        price: "R$ 288k",
        accent: PlanAccent::Sun,
    },
    Plan {
        tag: "Exclusividade",
        title: "Floresta Particular",
        detail: "Unidade exclusiva com 100m², deck expandido e vista infinita para o vale.",
        price: "Sob Consulta",
        accent: PlanAccent::Wood,
    },
];

// ── Testimonial ─────────────────────────────────────────────────

pub const TESTIMONIAL_QUOTE: &str = "\"Aqui não é apenas sobre o retorno financeiro. É sobre o \
retorno de energia. Todo final de semana que passamos no nosso 66 voltamos pessoas melhores.\"";

pub const TESTIMONIAL_AUTHOR: &str = "Clara & Roberto";
pub const TESTIMONIAL_SINCE: &str = "Convidados desde 2023";
pub const TESTIMONIAL_PHOTO_URL: &str =
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=200";

// ── Contato ─────────────────────────────────────────────────────

pub const CONTACT_PHONE: &str = "(27) 99937-8100";
pub const CONTACT_LOCATION: &str = "Domingos Martins, Espírito Santo";
