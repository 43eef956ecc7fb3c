use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result envelope shared by every OCR endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OcrResult<T> {
    /// Processing status reported by the API, e.g. `SUCCESS` or `NO_FILE`.
    pub status: String,
    /// Human readable explanation of `status`.
    #[serde(default)]
    pub reason: String,
    /// Extracted document data. Absent when the document could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read: Option<T>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// A single value read from a document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct OcrField {
    /// Normalized value.
    #[serde(default)]
    pub value: String,
    /// Confidence score of the read, from 0 to 100.
    #[serde(default)]
    pub confidence: f64,
    /// Corner points of the value on the image.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polygon: Vec<Vec<f64>>,
    /// Value as printed on the document, before normalization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_original: Option<String>,
}

/// Indonesian identity card (KTP).
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct KtpData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provinsi: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kota: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nik: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempat_lahir: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tanggal_lahir: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenis_kelamin: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub golongan_darah: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alamat: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rt_rw: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kelurahan_desa: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kecamatan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agama: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_perkawinan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pekerjaan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kewarganegaraan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub berlaku_hingga: Option<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Indonesian tax registration card (NPWP).
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct NpwpData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npwp: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nik: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alamat: Option<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Indonesian family card (KK).
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct KkData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor_kk: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama_kepala_keluarga: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alamat: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rt_rw: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desa_kelurahan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kecamatan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kabupaten_kota: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provinsi: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kode_pos: Option<OcrField>,
    /// One entry per family member listed on the card.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub anggota_keluarga: Vec<KkMember>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Family member row of a KK.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct KkMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nik: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenis_kelamin: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempat_lahir: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tanggal_lahir: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agama: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pendidikan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pekerjaan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_perkawinan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_hubungan: Option<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Vehicle registration certificate (STNK).
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct StnkData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor_registrasi: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama_pemilik: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alamat: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merk: Option<OcrField>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tipe: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenis: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tahun_pembuatan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isi_silinder: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor_rangka: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor_mesin: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warna: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bahan_bakar: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub berlaku_sampai: Option<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Vehicle ownership book (BPKB). Which fields are present depends on the scanned page.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BpkbData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor_bpkb: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor_registrasi: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nama_pemilik: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alamat: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merk: Option<OcrField>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub tipe: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jenis: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tahun_pembuatan: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isi_silinder: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warna: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor_rangka: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nomor_mesin: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bahan_bakar: Option<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Passport identity page.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PassportData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_number: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nationality: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_birth: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_issue: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_expiry_date: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrz: Option<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Vehicle license plate.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PlateData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate_number: Option<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// All text found by the general purpose model.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GeneralDocumentData {
    /// Every text fragment, in reading order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_texts: Vec<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Commercial invoice.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct InvoiceData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_name: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor_address: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<OcrField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_texts: Vec<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Retail receipt.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ReceiptData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_address: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_phone: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_time: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtotal: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<OcrField>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LineItem>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub all_texts: Vec<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Purchased item on an invoice or receipt.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct LineItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<OcrField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<OcrField>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}
