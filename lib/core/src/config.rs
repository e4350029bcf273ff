//! Shared configuration tables for the pipeline.
//!
//! Everything here is immutable data injected into the components at
//! construction: the controlled vocabulary used for subject tagging, the
//! rubric allow-lists, and the scoring thresholds. Tests substitute their
//! own tables through the component constructors.

/// Controlled vocabulary: canonical subject term mapped to alias terms.
///
/// A canonical subject is suggested for a record when the canonical term or
/// any alias occurs as a case-insensitive substring of the record's combined
/// text surface. Rows are kept sorted by canonical term.
pub const CONTROLLED_VOCAB: &[(&str, &[&str])] = &[
    (
        "climate",
        &[
            "meteorology",
            "weather",
            "climatology",
            "temperature",
            "precipitation",
        ],
    ),
    ("genomics", &["omics", "rna-seq", "genome", "transcriptomics"]),
    (
        "geospatial",
        &["gis", "geospatial", "geojson", "geotiff", "coordinates", "crs"],
    ),
    (
        "machine learning",
        &[
            "ai",
            "artificial intelligence",
            "ml",
            "neural network",
            "deep learning",
        ],
    ),
    (
        "metadata",
        &["dublin core", "datacite", "schema.org", "dcat", "ontology"],
    ),
];

/// Formats counted as machine-readable by the rubric. Compared against the
/// uppercased record format.
pub const MACHINE_READABLE_FORMATS: &[&str] = &[
    "CSV",
    "JSON",
    "PARQUET",
    "NDJSON",
    "TSV",
    "XML",
    "RDF",
    "TTL",
    "N-TRIPLES",
    "HDF5",
    "NETCDF",
    "GEOJSON",
];

/// Open-license allow-list. An uppercased license string passes when it
/// contains any of these entries as a substring.
pub const OPEN_LICENSES: &[&str] = &[
    "CC-BY",
    "CC-BY-4.0",
    "CC0",
    "ODC-ODBL",
    "ODC-BY",
    "MIT",
    "BSD-3",
    "APACHE-2.0",
    "GPL-3.0",
    "GPL-2.0",
];

/// Minimum keyword count for the F.keywords check.
pub const MIN_KEYWORDS: usize = 3;

/// Minimum trimmed provenance length (characters) for the R.provenance check.
pub const MIN_PROVENANCE_LEN: usize = 30;

/// Resolver prefix used to synthesize landing pages for DOI identifiers.
pub const DOI_RESOLVER: &str = "https://doi.org/";
