//! Prompt construction for facility briefings.

use sehat_catalog::Facility;

/// Builds the Indonesian-language instruction prompt for a facility.
///
/// The prompt asks for a multi-sentence summary, a short list of highlighted
/// services and one practical visitor tip, and grants permission to use the
/// web-search grounding tool so the answer reflects current information. The
/// JSON-only instruction is advisory: grounded responses routinely wrap or
/// pad it, so extraction never assumes clean JSON.
#[must_use]
pub fn build_prompt(facility: &Facility) -> String {
    format!(
        "Bertindaklah sebagai asisten kesehatan lokal Yogyakarta yang pintar.\n\
         Lakukan analisis mendalam tentang fasilitas kesehatan ini menggunakan Google Search:\n\
         \n\
         Nama: {name}\n\
         Alamat: {address}\n\
         Kategori: {category}\n\
         \n\
         Cari informasi terbaru di internet mengenai layanan unggulan, jam operasional, \
         ulasan pasien, dan ketersediaan layanan BPJS jika ada.\n\
         \n\
         Berikan output HANYA dalam format JSON valid (tanpa markdown code block) dengan struktur berikut:\n\
         {{\n\
             \"summary\": \"Penjelasan detail mengenai fasilitas kesehatan ini, spesialisasi medis, \
         dan kualitas pelayanan (min 2 kalimat). Gunakan Bahasa Indonesia yang sopan dan informatif.\",\n\
             \"activities\": [\"Layanan 1\", \"Layanan 2\", \"Layanan 3\"],\n\
             \"tips\": \"Satu tips penting bagi pasien (misal: pendaftaran online, jam buka poli, \
         atau ketersediaan parkir).\"\n\
         }}",
        name = facility.name,
        address = facility.address,
        category = facility.category,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sehat_catalog::{classify, Facility};
    use sehat_geo::Coordinate;

    fn facility() -> Facility {
        let name = "Puskesmas Tegalrejo";
        Facility {
            id: 19,
            sequence: 19,
            name: name.to_string(),
            address: "Jl. Magelang Karangwaru, Kec. Tegalrejo".to_string(),
            category: classify(name),
            coordinates: Coordinate::new(-7.772547077, 110.3589277),
            distance_km: None,
        }
    }

    #[test]
    fn test_prompt_embeds_facility_fields() {
        let prompt = build_prompt(&facility());
        assert!(prompt.contains("Nama: Puskesmas Tegalrejo"));
        assert!(prompt.contains("Alamat: Jl. Magelang Karangwaru"));
        assert!(prompt.contains("Kategori: Community Health Center"));
    }

    #[test]
    fn test_prompt_requests_structured_fields() {
        let prompt = build_prompt(&facility());
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"activities\""));
        assert!(prompt.contains("\"tips\""));
    }
}
