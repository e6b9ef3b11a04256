//! Prompt templates for the virtual barista. The wording is part of the
//! product: the assistant answers in Indonesian, and the templates pin the
//! model to exactly one recommended item.

use crate::domain::{MenuItem, OrderLine};

/// `id: 1, name: Croissant Cokelat, category: Makanan; id: 2, ...`
pub fn format_menu(menu: &[MenuItem]) -> String {
    menu.iter()
        .map(|item| format!("id: {}, name: {}, category: {}", item.id, item.name, item.category))
        .collect::<Vec<_>>()
        .join("; ")
}

/// `Caffe Latte (Qty: 1), Pandan Waffle (Qty: 2)` — or a fixed phrase for
/// an empty cart so the model still has something to react to.
pub fn format_order(order: &[OrderLine]) -> String {
    if order.is_empty() {
        return "Belum ada pesanan.".to_string();
    }
    order
        .iter()
        .map(|line| format!("{} (Qty: {})", line.item.name, line.quantity))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build the full prompt. With a free-text query the assistant answers the
/// question; without one it upsells against the current order.
pub fn build_prompt(menu: &[MenuItem], order: &[OrderLine], query: Option<&str>) -> String {
    let full_menu = format_menu(menu);

    match query {
        Some(query) => format!(
            "Anda adalah \"SmartCafé Assistant\", seorang barista virtual. \
             Berdasarkan menu kafe dan pertanyaan pelanggan, berikan satu rekomendasi yang paling sesuai.\n\n\
             Menu yang Tersedia (format: id, nama, kategori):\n{full_menu}\n\n\
             Pertanyaan Pelanggan: \"{query}\"\n\n\
             Tugas Anda:\n\
             1. Buat kalimat rekomendasi yang singkat dan ramah.\n\
             2. Pilih SATU item dari menu yang paling cocok dengan pertanyaan.\n\
             3. Kembalikan jawaban HANYA dalam format JSON."
        ),
        None => {
            let current_order = format_order(order);
            format!(
                "Anda adalah \"SmartCafé Assistant\", seorang barista virtual. \
                 Berdasarkan pesanan pelanggan saat ini, berikan satu rekomendasi menu tambahan yang cocok.\n\n\
                 Menu yang Tersedia (format: id, nama, kategori):\n{full_menu}\n\n\
                 Pesanan Pelanggan Saat Ini: {current_order}\n\n\
                 Tugas Anda:\n\
                 1. Jika pesanan kosong, rekomendasikan menu spesial. Jika sudah ada pesanan, rekomendasikan item yang melengkapinya.\n\
                 2. Buat kalimat rekomendasi yang natural dan menarik (Contoh: \"Anda suka Caffe Latte? Coba deh Pandan Waffle kami, cocok banget!\").\n\
                 3. Pilih SATU item dari menu untuk direkomendasikan.\n\
                 4. Kembalikan jawaban HANYA dalam format JSON."
            )
        }
    }
}
