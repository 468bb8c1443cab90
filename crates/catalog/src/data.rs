//! The embedded Yogyakarta facility catalog.
//!
//! Derived from the provincial health-facility register (sampled for
//! coverage). Entries are classified once when the catalog is first
//! accessed; the catalog itself is immutable for the process lifetime.

use crate::{classify, Facility, FacilityCatalog};
use once_cell::sync::Lazy;
use sehat_geo::Coordinate;

/// Yogyakarta city-center reference coordinate.
pub const YOGYAKARTA_CENTER: Coordinate = Coordinate {
    latitude: -7.8014,
    longitude: 110.3647,
};

struct Record {
    id: u32,
    sequence: u32,
    name: &'static str,
    address: &'static str,
    lat: f64,
    lng: f64,
}

const fn record(
    id: u32,
    sequence: u32,
    name: &'static str,
    address: &'static str,
    lat: f64,
    lng: f64,
) -> Record {
    Record { id, sequence, name, address, lat, lng }
}

#[rustfmt::skip]
const RECORDS: &[Record] = &[
    record(1, 1, "RS Islam Hidayatullah Yogyakarta", "Jl Veteran No.184 Pandeyan Umbulharjo Yogyakarta", -7.8154, 110.388),
    record(2, 2, "RS Tk. III 04.06.03 Dr. Soetarto", "Jl. Juadi No.19, Kotabaru, Kec. Gondokusuman", -7.7857, 110.377),
    record(3, 3, "RS PKU Muhammadiyah Yogyakarta", "Jl K.H. Ahmad Dahlan No. 20 Ngupasan Gondomanan Yogyakarta", -7.80088, 110.36231),
    record(4, 4, "RS Umum Panti Rapih", "Jl. Cik Di Tiro 30 Yogyakarta", -7.7773, 110.3767),
    record(5, 5, "RS Bethesda Yogyakarta", "Jl Jend. Sudirman No. 70 Kotabaru Yogyakarta", -7.7836, 110.377),
    record(7, 7, "RS Mata Dr. Yap", "Jl Cik Di Tiro No. 5 Yogyakarta", -7.78, 110.375),
    record(9, 9, "RS Umum Daerah Kota Yogyakarta", "Jl Wirosaban No. 1 Yogyakarta", -7.82585, 110.378),
    record(17, 17, "RS Siloam Yogyakarta", "Jl. Laksda Adisucipto Nomor 32 34 Yogyakarta 55221", -7.78329, 110.39069),
    record(19, 19, "Puskesmas Tegalrejo", "Jl. Magelang Karangwaru, Kec. Tegalrejo", -7.772547077, 110.3589277),
    record(20, 20, "Puskesmas Jetis", "Jl. Diponegoro 91, Kec. Jetis", -7.783216677, 110.3599674),
    record(25, 25, "Puskesmas Gedongtengen", "Jl. Pringgokusuman 30, Kec. Gedong Tengen", -7.791211777, 110.3551213),
    record(29, 29, "Puskesmas Kraton", "Jalan langenastran kidul 3 Panembahan Kraton", -7.811994578, 110.3615724),
    record(33, 33, "Puskesmas Umbulharjo I", "Jl. Veteran 43, Kec. Umbulharjo", -7.806299477, 110.3920851),
    record(35, 35, "Puskesmas Kotagede I", "Jl. Kemasan 12, Kec. Kota Gede", -7.822080131, 110.400625),
    record(46, 46, "Klinik Kecantikan Pratama Naavagreen Plus", "Jl. Abu Bakar Ali No. 18 Kotabaru Gondokusuman Yogyakarta", -7.7882101, 110.3690645),
    record(48, 48, "Klinik Utama Prodia Health Care", "Jl. Bintaran Kulon No. 28 Wirogunan Mergangsan Yogyakarta", -7.8028104, 110.3698925),
    record(54, 54, "Klinik Natasha Skin Clinic Center", "Jl. Brigjend Katamso No. 300 Keparakan Mergangsan Yogyakarta", -7.8139828, 110.3660204),
    record(61, 61, "Klinik Utama Peri Gigi", "Jl. Prof. Yohanes Kav. E dan F Terban Gondokusuman Yogyakarta", -7.7815037, 110.3766492),
    record(78, 78, "Klinik Gigi Utama FDC Dental Clinic", "Jl. P. Diponegoro No. 63 Gowongan Jetis Yogyakarta", -7.7830004, 110.361511),
    record(87, 87, "Klinik Pratama Biddokkes Polda DIY", "Jl. Sekardwijan No. 6 Balapan, Klitren, Gondokusuman Yogyakarta.", -7.7856022, 110.3820661),
    record(105, 105, "Klinik Pratama Rumah Sehat UGM", "Jl. Prof. dr. Sardjito No. 25 Terban Gondokusuman Yogyakarta", -7.7756957, 110.369829),
    record(140, 140, "Klinik Pratama Polresta Yogyakarta", "Jl. Aipda KS. Tubun No. 20, Ngampilan", -7.797399777, 110.3607397),
    record(162, 162, "Klinik Utama ZAP Yogyakarta Suroto", "Jl. Suroto No. 16 RT 001, Kotabaru, Gondokusuman", -7.7837314, 110.3749104),
    record(177, 177, "Lab Kesehatan Dinas Kesehatan D I Yogyakarta", "Ngadinegaran MJ III/62 Mantrijeron", -7.816161184, 110.3643835),
    record(180, 180, "Laboratorium Medis Umum Utama CITO", "Jl. Atmosukarto No. 4 Kotabaru Gondokusuman Yogyakarta", -7.788530044, 110.3752513),
    record(184, 184, "Praktik Perseorangan dr. Adam Izza Fahrian", "Jl. Ibu Ruswo No 51 Gondomanan Kota Yogyakarta", -7.803427868, 110.3682541),
    record(198, 198, "Praktik Perseorangan dr. Ary Kamal Firdaous", "Apotek K 24 Gondomanan, Jl. Brigjen Katamso No. 117", -7.807836381, 110.3693649),
    record(212, 212, "Praktik dr. Elena Mahotsaha Vediyen", "Jl. Prof. Herman Yohanes No. 1034 Terban", -7.77869215, 110.3796066),
    record(282, 282, "Praktik dr. Yuliana Guwanto", "Jl. Bangirejo Taman No.24 Karangwaru Tegalrejo Yogyakarta", -7.777962101, 110.3635388),
    record(284, 284, "Praktik drg. Abdul Kadir", "Jl. Dongkelan No. 100 Minggiran Suryodiningratan", -7.825873045, 110.3572781),
    record(288, 288, "Praktik drg. Antonia Damararum", "Jl. KHA. Dahlan no 99 Yogyakarta", -7.801164179, 110.3584305),
    record(374, 374, "Pranoto Optic Jl. C Simanjuntak", "Jl. C Simanjuntak No. 6 Yogyakarta", -7.779878515, 110.3730193),
    record(378, 378, "Optik Melawai Urip Sumoharjo", "Jl. Urip Sumoharjo No. 29 (75) Yogyakarta", -7.782768202, 110.3833927),
    record(382, 382, "Optik RS Mata dr. Yap", "Jl. Cik Dik Tiro No. 5 Yogyakarta", -7.780607081, 110.3749676),
    record(391, 391, "Optik Seis Plaza Malioboro", "Malioboro No. 52-58 Suryatmajan", -7.792990187, 110.3665629),
    record(408, 408, "OPTIK TELKOMEDIKA", "Jl. Kenari No.3 Semaki Yogyakarta", -7.797448541, 110.3853109),
    record(45, 45, "Klinik Max + Dental Giwangan", "Jl. Imogiri Timur No. 113 D Giwangan", -7.8274437, 110.387573),
    record(50, 50, "LBC Jl. Bhayangkara", "Jl. Bhayangkara No. 42 Ngupasan", -7.796403603, 110.3617004),
    record(53, 53, "Klinik Pratama Seger Waras BNNP DIY", "Jl. Brigjen Katamso Komplek Perkantoran Keparakan", -7.8093341, 110.3673457),
    record(64, 64, "Larissa Aesthetic Center Galeria", "Galeria Mall Lantai 1, Jl. Jend. Sudirman", -7.7822069, 110.3763466),
    record(96, 96, "Klinik Pratama Pertamina", "Jl. Margo Utomo No. 20 Gowongan Jetis", -7.7882912, 110.3663579),
    record(104, 104, "Klinik Utama Prodia Mangkubumi", "Jl. P. Mangkubumi No. 50 Gowongan Jetis", -7.7849732, 110.3644656),
    record(141, 141, "Klinik Utama Hi-Lab", "Jl. Magelang no. 156-160, Karangwaru", -7.7742228, 110.3587701),
    record(386, 386, "Argus Optik", "Jl. Jendral Sudirman No 4 Yogyakarta", -7.782846332, 110.3674189),
    record(405, 405, "CENTRAL OPTIC", "Jl. Kranggan no. 41 Cokrodiningratan Yogyakarta", -7.781427212, 110.3639236),
];

static CATALOG: Lazy<FacilityCatalog> = Lazy::new(|| {
    FacilityCatalog::new(
        RECORDS
            .iter()
            .map(|r| Facility {
                id: r.id,
                sequence: r.sequence,
                name: r.name.to_string(),
                address: r.address.to_string(),
                category: classify(r.name),
                coordinates: Coordinate::new(r.lat, r.lng),
                distance_km: None,
            })
            .collect(),
    )
});

/// The embedded facility catalog, classified on first access.
#[must_use]
pub fn catalog() -> &'static FacilityCatalog {
    &CATALOG
}
