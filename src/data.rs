//! Static seed data. Everything here is reloaded fresh on every start;
//! nothing an admin changes outlives the process.

use crate::domain::{MenuCategory, MenuItem, Role, User};

pub fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(
            1,
            "Croissant Cokelat",
            25_000,
            MenuCategory::Food,
            "https://i.pinimg.com/1200x/cf/9b/af/cf9bafa8f904bb4c2aacf06cebf46331.jpg",
        ),
        MenuItem::new(
            2,
            "Pandan Waffle",
            35_000,
            MenuCategory::Food,
            "https://i.pinimg.com/736x/a9/bf/2a/a9bf2a93f40d98682aaa78c9305076ab.jpg",
        ),
        MenuItem::new(
            3,
            "Nasi Goreng Spesial",
            45_000,
            MenuCategory::Food,
            "https://i.pinimg.com/736x/79/3b/06/793b06f69a3817eeaa8274ee0bfb3415.jpg",
        ),
        MenuItem::new(
            4,
            "Spaghetti Carbonara",
            55_000,
            MenuCategory::Food,
            "https://i.pinimg.com/1200x/6c/b5/d8/6cb5d86b51a6a8944c0e69f9773f0474.jpg",
        ),
        MenuItem::new(
            5,
            "Caffe Latte",
            30_000,
            MenuCategory::Drinks,
            "https://i.pinimg.com/736x/e3/83/f9/e383f9aba12fcabbffd116323690fb57.jpg",
        ),
        MenuItem::new(
            6,
            "Es Teh Leci",
            28_000,
            MenuCategory::Drinks,
            "https://i.pinimg.com/1200x/d6/59/cb/d659cbe49c5d9954e85423b1b0d68444.jpg",
        ),
        MenuItem::new(
            7,
            "Jus Alpukat",
            32_000,
            MenuCategory::Drinks,
            "https://i.pinimg.com/736x/a5/df/58/a5df58cb2972c04ca6f4a74e08a27eb1.jpg",
        ),
        MenuItem::new(
            8,
            "Cappuccino",
            30_000,
            MenuCategory::Drinks,
            "https://i.pinimg.com/736x/4d/e4/0c/4de40c8bbd7ca5c9a76587faf386d444.jpg",
        ),
        MenuItem::new(
            9,
            "Kopi Tubruk Gayo",
            40_000,
            MenuCategory::Specials,
            "https://i.pinimg.com/1200x/67/ef/17/67ef1771597ffc496776c699a2f0fe6d.jpg",
        ),
        MenuItem::new(
            10,
            "Signature Choco-Mint",
            38_000,
            MenuCategory::Specials,
            "https://i.pinimg.com/736x/10/7e/e3/107ee344ed2c00162c86a31ca3d37015.jpg",
        ),
    ]
}

pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "admin", "admin123", Role::Admin),
        User::new(2, "user", "user123", Role::Buyer),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn seed_ids_are_unique() {
        let menu_ids: BTreeSet<u32> = seed_menu().iter().map(|i| i.id).collect();
        assert_eq!(menu_ids.len(), seed_menu().len());

        let user_ids: BTreeSet<u32> = seed_users().iter().map(|u| u.id).collect();
        assert_eq!(user_ids.len(), seed_users().len());
    }
}
