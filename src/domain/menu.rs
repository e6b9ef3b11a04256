use std::fmt;

/// Menu card categories as shown on the ordering screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCategory {
    Food,
    Drinks,
    Specials,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 3] = [
        MenuCategory::Food,
        MenuCategory::Drinks,
        MenuCategory::Specials,
    ];

    /// Customer-facing label used on screen and in assistant prompts.
    pub fn label(&self) -> &'static str {
        match self {
            MenuCategory::Food => "Makanan",
            MenuCategory::Drinks => "Minuman",
            MenuCategory::Specials => "Menu Spesial",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single item on the café menu. Prices are integer rupiah.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub category: MenuCategory,
    pub image_url: String,
}

impl MenuItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: u64,
        category: MenuCategory,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            category,
            image_url: image_url.into(),
        }
    }
}

/// Payload for creating a new menu item.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub name: String,
    pub price: u64,
    pub category: MenuCategory,
    pub image_url: String,
}

/// Payload for updating an existing menu item. `None` fields are left as-is.
#[derive(Debug, Clone)]
pub struct MenuItemPatch {
    pub name: Option<String>,
    pub price: Option<u64>,
    pub category: Option<MenuCategory>,
    pub image_url: Option<String>,
}
