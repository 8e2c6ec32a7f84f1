crate::define_id_enum! {
    /// App Store category declared by a bundle
    Category (fallback = Uncategorized) {
        Business => "business" : "Business",
        DeveloperTools => "developer-tools" : "Developer Tools",
        Education => "education" : "Education",
        Entertainment => "entertainment" : "Entertainment",
        Finance => "finance" : "Finance",
        Games => "games" : "Games",
        GraphicsDesign => "graphics-design" : "Graphics & Design" | "Graphics and Design",
        HealthcareFitness => "healthcare-fitness" : "Healthcare & Fitness" | "Health & Fitness",
        Lifestyle => "lifestyle" : "Lifestyle",
        Medical => "medical" : "Medical",
        Music => "music" : "Music",
        News => "news" : "News",
        Photography => "photography" : "Photography" | "Photo & Video",
        Productivity => "productivity" : "Productivity",
        Reference => "reference" : "Reference",
        SocialNetworking => "social-networking" : "Social Networking",
        Sports => "sports" : "Sports",
        Travel => "travel" : "Travel",
        Utilities => "utilities" : "Utilities",
        Video => "video" : "Video",
        Weather => "weather" : "Weather",
        Uncategorized => "uncategorized" : "Uncategorized",
    }
}

const IDENTIFIER_PREFIX: &str = "public.app-category.";

impl Category {
    /// Map a declared category to the enumeration.
    ///
    /// Accepts `LSApplicationCategoryType` identifiers
    /// (`public.app-category.productivity`, including the `*-games` family) as well
    /// as plain canonical or display names.
    pub fn from_declared(value: &str) -> Self {
        let value = value.trim();
        let short = match value.get(..IDENTIFIER_PREFIX.len()) {
            Some(prefix) if prefix.eq_ignore_ascii_case(IDENTIFIER_PREFIX) => {
                &value[IDENTIFIER_PREFIX.len()..]
            }
            _ => value,
        };

        if let Some(category) = Self::from_name(short) {
            return category;
        }

        if short.to_ascii_lowercase().ends_with("-games") {
            return Self::Games;
        }

        Self::Uncategorized
    }

    pub fn identifier(&self) -> Option<String> {
        match self {
            Self::Uncategorized => None,
            other => Some(format!("{}{}", IDENTIFIER_PREFIX, other.canonical())),
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Uncategorized
    }
}
