//! Searchable-field catalogue for the Lens Scholar API.
//!
//! Every field the API accepts is an explicit [`Field`] variant carrying its
//! wire name (some use dotted paths like `author.display_name`), the value
//! kind it accepts, and an optional list of permitted values. The catalogue
//! follows <https://docs.api.lens.org/request-scholar.html#searchable-fields>.

/// A searchable field of a Lens scholarly record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Field {
    // General
    Title,
    Abstract,
    FullText,
    PublicationType,
    PublicationSupplementaryType,
    ExternalIdType,
    // Retraction
    RetractionUpdateDate,
    RetractionUpdateNature,
    RetractionUpdateReason,
    // Author
    AuthorDisplayName,
    AuthorFirstName,
    AuthorLastName,
    AuthorOrcid,
    AuthorMaqid,
    AuthorAffiliationName,
    AuthorCount,
    // Citation
    ReferenceLensId,
    ReferencedByCount,
    ReferenceCount,
    ReferencedByPatentLensId,
    ReferencedByPatentCount,
    // External identifiers
    Doi,
    Magid,
    Pmid,
    Pmcid,
    Coreid,
    Openalex,
    // Source
    SourceTitle,
    SourceTitleExact,
    SourcePublisher,
    SourceCountry,
    SourceAsjcCode,
    SourceIssn,
    // Subject matter
    FieldOfStudy,
    SourceAsjcSubject,
    Keyword,
    ChemicalMeshUi,
    ChemicalRegistryNumber,
    ChemicalSubstanceName,
    MeshTermMeshHeading,
    MeshTermMeshUi,
    // Institutions
    AuthorAffiliationNameExact,
    AuthorAffiliationNameOriginal,
    AuthorAffiliationRorId,
    AuthorAffiliationRorIdLineage,
    AuthorAffiliationAddressCity,
    AuthorAffiliationAddressStateCode,
    AuthorAffiliationAddressCountryCode,
    AuthorAffiliationType,
    // Funding
    FundingCountry,
    FundingFundingId,
    FundingOrganisation,
    FundingOrganisationExact,
    // Conferences
    ConferenceName,
    ConferenceInstance,
    ConferenceLocation,
    // Clinical trials
    ClinicalTrialRegistry,
    ClinicalTrialTrialId,
    // Open access
    OpenAccessColour,
    OpenAccessLicense,
    // Dates
    DatePublished,
    YearPublished,
    Created,
    // Boolean filters
    IsReferencedByScholarly,
    HasPatentCitations,
    HasAffiliation,
    HasAffiliationGrid,
    HasAffiliationRor,
    HasOrcid,
    HasMeshTerm,
    HasChemical,
    HasKeyword,
    HasClinicalTrial,
    HasFieldOfStudy,
    HasAbstract,
    HasFullText,
    HasFunding,
    IsOpenAccess,
    InAnalyticsSet,
    SourceIsDiamond,
    IsRetracted,
}

/// The shape of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text or keyword; accepts strings.
    Text,
    /// Whole numbers (author counts, citation counts).
    Integer,
    /// Boolean flags (`has_abstract`, `is_open_access`, ...).
    Boolean,
    /// Publication year; accepts an integer or a 4-digit string.
    Year,
    /// Calendar date in `YYYY-MM-DD` form.
    Date,
}

/// Catalogue group a field belongs to, mirroring the sections of the
/// searchable-fields documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    General,
    Retraction,
    Author,
    Citation,
    ExternalId,
    Source,
    SubjectMatter,
    Institutions,
    Funding,
    Conferences,
    ClinicalTrials,
    OpenAccess,
    Date,
    BooleanFilter,
}

impl Field {
    /// All catalogued fields.
    pub const ALL: &'static [Field] = &[
        Field::Title,
        Field::Abstract,
        Field::FullText,
        Field::PublicationType,
        Field::PublicationSupplementaryType,
        Field::ExternalIdType,
        Field::RetractionUpdateDate,
        Field::RetractionUpdateNature,
        Field::RetractionUpdateReason,
        Field::AuthorDisplayName,
        Field::AuthorFirstName,
        Field::AuthorLastName,
        Field::AuthorOrcid,
        Field::AuthorMaqid,
        Field::AuthorAffiliationName,
        Field::AuthorCount,
        Field::ReferenceLensId,
        Field::ReferencedByCount,
        Field::ReferenceCount,
        Field::ReferencedByPatentLensId,
        Field::ReferencedByPatentCount,
        Field::Doi,
        Field::Magid,
        Field::Pmid,
        Field::Pmcid,
        Field::Coreid,
        Field::Openalex,
        Field::SourceTitle,
        Field::SourceTitleExact,
        Field::SourcePublisher,
        Field::SourceCountry,
        Field::SourceAsjcCode,
        Field::SourceIssn,
        Field::FieldOfStudy,
        Field::SourceAsjcSubject,
        Field::Keyword,
        Field::ChemicalMeshUi,
        Field::ChemicalRegistryNumber,
        Field::ChemicalSubstanceName,
        Field::MeshTermMeshHeading,
        Field::MeshTermMeshUi,
        Field::AuthorAffiliationNameExact,
        Field::AuthorAffiliationNameOriginal,
        Field::AuthorAffiliationRorId,
        Field::AuthorAffiliationRorIdLineage,
        Field::AuthorAffiliationAddressCity,
        Field::AuthorAffiliationAddressStateCode,
        Field::AuthorAffiliationAddressCountryCode,
        Field::AuthorAffiliationType,
        Field::FundingCountry,
        Field::FundingFundingId,
        Field::FundingOrganisation,
        Field::FundingOrganisationExact,
        Field::ConferenceName,
        Field::ConferenceInstance,
        Field::ConferenceLocation,
        Field::ClinicalTrialRegistry,
        Field::ClinicalTrialTrialId,
        Field::OpenAccessColour,
        Field::OpenAccessLicense,
        Field::DatePublished,
        Field::YearPublished,
        Field::Created,
        Field::IsReferencedByScholarly,
        Field::HasPatentCitations,
        Field::HasAffiliation,
        Field::HasAffiliationGrid,
        Field::HasAffiliationRor,
        Field::HasOrcid,
        Field::HasMeshTerm,
        Field::HasChemical,
        Field::HasKeyword,
        Field::HasClinicalTrial,
        Field::HasFieldOfStudy,
        Field::HasAbstract,
        Field::HasFullText,
        Field::HasFunding,
        Field::IsOpenAccess,
        Field::InAnalyticsSet,
        Field::SourceIsDiamond,
        Field::IsRetracted,
    ];

    /// The field name as it appears in an emitted query clause.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Abstract => "abstract",
            Self::FullText => "full_text",
            Self::PublicationType => "publication_type",
            Self::PublicationSupplementaryType => "publication_supplementary_type",
            Self::ExternalIdType => "external_id_type",
            Self::RetractionUpdateDate => "retraction_update.date",
            Self::RetractionUpdateNature => "retraction_update.nature",
            Self::RetractionUpdateReason => "retraction_update.reason",
            Self::AuthorDisplayName => "author.display_name",
            Self::AuthorFirstName => "author.first_name",
            Self::AuthorLastName => "author.last_name",
            Self::AuthorOrcid => "author.orcid",
            Self::AuthorMaqid => "author.maqid",
            Self::AuthorAffiliationName => "author.affiliation.name",
            Self::AuthorCount => "author_count",
            Self::ReferenceLensId => "reference_lens_id",
            Self::ReferencedByCount => "referenced_by_count",
            Self::ReferenceCount => "reference_count",
            Self::ReferencedByPatentLensId => "referenced_by_patent.lens_id",
            Self::ReferencedByPatentCount => "referenced_by_patent_count",
            Self::Doi => "doi",
            Self::Magid => "magid",
            Self::Pmid => "pmid",
            Self::Pmcid => "pmcid",
            Self::Coreid => "coreid",
            Self::Openalex => "openalex",
            Self::SourceTitle => "source.title",
            Self::SourceTitleExact => "source.title.exact",
            Self::SourcePublisher => "source.publisher",
            Self::SourceCountry => "source.country",
            Self::SourceAsjcCode => "source.asjc_code",
            Self::SourceIssn => "source.issn",
            Self::FieldOfStudy => "field_of_study",
            Self::SourceAsjcSubject => "source.asjc_subject",
            Self::Keyword => "keyword",
            Self::ChemicalMeshUi => "chemical.mesh_ui",
            Self::ChemicalRegistryNumber => "chemical.registry_number",
            Self::ChemicalSubstanceName => "chemical.substance_name",
            Self::MeshTermMeshHeading => "mesh_term.mesh_heading",
            Self::MeshTermMeshUi => "mesh_term.mesh_ui",
            Self::AuthorAffiliationNameExact => "author.affiliation.name.exact",
            Self::AuthorAffiliationNameOriginal => "author.affiliation.name.original",
            Self::AuthorAffiliationRorId => "author.affiliation.ror_id",
            Self::AuthorAffiliationRorIdLineage => "author.affiliation.ror_id_lineage",
            Self::AuthorAffiliationAddressCity => "author.affiliation.address.city",
            Self::AuthorAffiliationAddressStateCode => "author.affiliation.address.state_code",
            Self::AuthorAffiliationAddressCountryCode => "author.affiliation.address.country_code",
            Self::AuthorAffiliationType => "author.affiliation.type",
            Self::FundingCountry => "funding.country",
            Self::FundingFundingId => "funding.funding_id",
            Self::FundingOrganisation => "funding.organisation",
            Self::FundingOrganisationExact => "funding.organisation.exact",
            Self::ConferenceName => "conference.name",
            Self::ConferenceInstance => "conference.instance",
            Self::ConferenceLocation => "conference.location",
            Self::ClinicalTrialRegistry => "clinical_trial.registry",
            Self::ClinicalTrialTrialId => "clinical_trial.trial_id",
            Self::OpenAccessColour => "open_access.colour",
            Self::OpenAccessLicense => "open_access.license",
            Self::DatePublished => "date_published",
            Self::YearPublished => "year_published",
            Self::Created => "created",
            Self::IsReferencedByScholarly => "is_referenced_by_scholarly",
            Self::HasPatentCitations => "has_patent_citations",
            Self::HasAffiliation => "has_affiliation",
            Self::HasAffiliationGrid => "has_affiliation_grid",
            Self::HasAffiliationRor => "has_affiliation_ror",
            Self::HasOrcid => "has_orcid",
            Self::HasMeshTerm => "has_mesh_term",
            Self::HasChemical => "has_chemical",
            Self::HasKeyword => "has_keyword",
            Self::HasClinicalTrial => "has_clinical_trial",
            Self::HasFieldOfStudy => "has_field_of_study",
            Self::HasAbstract => "has_abstract",
            Self::HasFullText => "has_full_text",
            Self::HasFunding => "has_funding",
            Self::IsOpenAccess => "is_open_access",
            Self::InAnalyticsSet => "in_analytics_set",
            Self::SourceIsDiamond => "source.is_diamond",
            Self::IsRetracted => "is_retracted",
        }
    }

    /// Snake-case parameter name, with dots flattened to underscores
    /// (`author.display_name` -> `author_display_name`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::RetractionUpdateDate => "retraction_update_date",
            Self::RetractionUpdateNature => "retraction_update_nature",
            Self::RetractionUpdateReason => "retraction_update_reason",
            Self::AuthorDisplayName => "author_display_name",
            Self::AuthorFirstName => "author_first_name",
            Self::AuthorLastName => "author_last_name",
            Self::AuthorOrcid => "author_orcid",
            Self::AuthorMaqid => "author_maqid",
            Self::AuthorAffiliationName => "author_affiliation_name",
            Self::ReferencedByPatentLensId => "referenced_by_patent_lens_id",
            Self::SourceTitle => "source_title",
            Self::SourceTitleExact => "source_title_exact",
            Self::SourcePublisher => "source_publisher",
            Self::SourceCountry => "source_country",
            Self::SourceAsjcCode => "source_asjc_code",
            Self::SourceIssn => "source_issn",
            Self::SourceAsjcSubject => "source_asjc_subject",
            Self::ChemicalMeshUi => "chemical_mesh_ui",
            Self::ChemicalRegistryNumber => "chemical_registry_number",
            Self::ChemicalSubstanceName => "chemical_substance_name",
            Self::MeshTermMeshHeading => "mesh_term_mesh_heading",
            Self::MeshTermMeshUi => "mesh_term_mesh_ui",
            Self::AuthorAffiliationNameExact => "author_affiliation_name_exact",
            Self::AuthorAffiliationNameOriginal => "author_affiliation_name_original",
            Self::AuthorAffiliationRorId => "author_affiliation_ror_id",
            Self::AuthorAffiliationRorIdLineage => "author_affiliation_ror_id_lineage",
            Self::AuthorAffiliationAddressCity => "author_affiliation_address_city",
            Self::AuthorAffiliationAddressStateCode => "author_affiliation_address_state_code",
            Self::AuthorAffiliationAddressCountryCode => "author_affiliation_address_country_code",
            Self::AuthorAffiliationType => "author_affiliation_type",
            Self::FundingCountry => "funding_country",
            Self::FundingFundingId => "funding_funding_id",
            Self::FundingOrganisation => "funding_organisation",
            Self::FundingOrganisationExact => "funding_organisation_exact",
            Self::ConferenceName => "conference_name",
            Self::ConferenceInstance => "conference_instance",
            Self::ConferenceLocation => "conference_location",
            Self::ClinicalTrialRegistry => "clinical_trial_registry",
            Self::ClinicalTrialTrialId => "clinical_trial_trial_id",
            Self::OpenAccessColour => "open_access_colour",
            Self::OpenAccessLicense => "open_access_license",
            Self::SourceIsDiamond => "source_is_diamond",
            other => other.as_api_str(),
        }
    }

    /// Parse a field from its parameter name (case-insensitive).
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let lowered = s.to_lowercase();
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.name() == lowered || f.as_api_str() == lowered)
    }

    /// The value kind this field accepts.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::AuthorCount
            | Self::ReferencedByCount
            | Self::ReferenceCount
            | Self::ReferencedByPatentCount => FieldKind::Integer,
            Self::YearPublished => FieldKind::Year,
            Self::RetractionUpdateDate | Self::DatePublished | Self::Created => FieldKind::Date,
            Self::IsReferencedByScholarly
            | Self::HasPatentCitations
            | Self::HasAffiliation
            | Self::HasAffiliationGrid
            | Self::HasAffiliationRor
            | Self::HasOrcid
            | Self::HasMeshTerm
            | Self::HasChemical
            | Self::HasKeyword
            | Self::HasClinicalTrial
            | Self::HasFieldOfStudy
            | Self::HasAbstract
            | Self::HasFullText
            | Self::HasFunding
            | Self::IsOpenAccess
            | Self::InAnalyticsSet
            | Self::SourceIsDiamond
            | Self::IsRetracted => FieldKind::Boolean,
            _ => FieldKind::Text,
        }
    }

    /// Catalogue group this field belongs to.
    pub fn group(&self) -> FieldGroup {
        match self {
            Self::Title
            | Self::Abstract
            | Self::FullText
            | Self::PublicationType
            | Self::PublicationSupplementaryType
            | Self::ExternalIdType => FieldGroup::General,
            Self::RetractionUpdateDate
            | Self::RetractionUpdateNature
            | Self::RetractionUpdateReason => FieldGroup::Retraction,
            Self::AuthorDisplayName
            | Self::AuthorFirstName
            | Self::AuthorLastName
            | Self::AuthorOrcid
            | Self::AuthorMaqid
            | Self::AuthorAffiliationName
            | Self::AuthorCount => FieldGroup::Author,
            Self::ReferenceLensId
            | Self::ReferencedByCount
            | Self::ReferenceCount
            | Self::ReferencedByPatentLensId
            | Self::ReferencedByPatentCount => FieldGroup::Citation,
            Self::Doi | Self::Magid | Self::Pmid | Self::Pmcid | Self::Coreid | Self::Openalex => {
                FieldGroup::ExternalId
            }
            Self::SourceTitle
            | Self::SourceTitleExact
            | Self::SourcePublisher
            | Self::SourceCountry
            | Self::SourceAsjcCode
            | Self::SourceIssn => FieldGroup::Source,
            Self::FieldOfStudy
            | Self::SourceAsjcSubject
            | Self::Keyword
            | Self::ChemicalMeshUi
            | Self::ChemicalRegistryNumber
            | Self::ChemicalSubstanceName
            | Self::MeshTermMeshHeading
            | Self::MeshTermMeshUi => FieldGroup::SubjectMatter,
            Self::AuthorAffiliationNameExact
            | Self::AuthorAffiliationNameOriginal
            | Self::AuthorAffiliationRorId
            | Self::AuthorAffiliationRorIdLineage
            | Self::AuthorAffiliationAddressCity
            | Self::AuthorAffiliationAddressStateCode
            | Self::AuthorAffiliationAddressCountryCode
            | Self::AuthorAffiliationType => FieldGroup::Institutions,
            Self::FundingCountry
            | Self::FundingFundingId
            | Self::FundingOrganisation
            | Self::FundingOrganisationExact => FieldGroup::Funding,
            Self::ConferenceName | Self::ConferenceInstance | Self::ConferenceLocation => {
                FieldGroup::Conferences
            }
            Self::ClinicalTrialRegistry | Self::ClinicalTrialTrialId => FieldGroup::ClinicalTrials,
            Self::OpenAccessColour | Self::OpenAccessLicense => FieldGroup::OpenAccess,
            Self::DatePublished | Self::YearPublished | Self::Created => FieldGroup::Date,
            _ => FieldGroup::BooleanFilter,
        }
    }

    /// Whether Elasticsearch range clauses apply to this field.
    ///
    /// The API supports `range` only on numeric and date fields.
    pub fn supports_range(&self) -> bool {
        matches!(
            self.kind(),
            FieldKind::Integer | FieldKind::Year | FieldKind::Date
        )
    }

    /// Permitted values for restricted fields, if any.
    pub fn restrictions(&self) -> Option<&'static [&'static str]> {
        match self {
            Self::PublicationType => Some(PUBLICATION_TYPES),
            Self::PublicationSupplementaryType => Some(PUBLICATION_SUPPLEMENTARY_TYPES),
            Self::ExternalIdType => Some(EXTERNAL_ID_TYPES),
            Self::RetractionUpdateNature => Some(RETRACTION_NATURES),
            Self::RetractionUpdateReason => Some(RETRACTION_REASONS),
            _ => None,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_api_str())
    }
}

/// Accepted `publication_type` values (case sensitive).
pub const PUBLICATION_TYPES: &[&str] = &[
    "journal article",
    "book chapter",
    "component",
    "conference proceedings article",
    "dataset",
    "book",
    "dissertation",
    "preprint",
    "libguide",
    "journal issue",
    "report",
    "conference proceedings",
    "reference entry",
    "unknown",
    "other",
];

/// Accepted `publication_supplementary_type` values (case sensitive).
pub const PUBLICATION_SUPPLEMENTARY_TYPES: &[&str] = &[
    "review",
    "standart",
    "editorial",
    "letters",
    "news",
    "journal",
    "clinical trial",
    "journal volume",
    "clinical stduy",
    "working paper",
];

/// Accepted `external_id_type` values.
pub const EXTERNAL_ID_TYPES: &[&str] = &["doi", "magid", "pmid", "pmcid", "coreid", "openalex"];

/// Accepted `retraction_update.nature` values.
pub const RETRACTION_NATURES: &[&str] = &[
    "Retraction",
    "Expression of Concern",
    "Correction",
    "Reinstatement",
];

/// Accepted `retraction_update.reason` values, per the Retraction Watch
/// taxonomy used by the Lens.
pub const RETRACTION_REASONS: &[&str] = &[
    "Author Unresponsive",
    "Bias Issues or Lack of Balance",
    "Breach of Policy by Author",
    "Cites Retracted Work",
    "Civil Proceedings",
    "Complaints about Author",
    "Complaints about Company/Institution",
    "Complaints about Third Party",
    "Concerns/Issues about Animal Welfare",
    "Concern/Issues about Article",
    "Concerns/Issues About Authorship/Affiliation",
    "Concerns/Issues About Data",
    "Concerns/Issues about Human Subject Welfare",
    "Concerns/Issues About Image",
    "Concerns/Issues about Referencing/Attributions",
    "Concerns/Issues About Results",
    "Concerns/Issues about Third Party Involvement",
    "Concerns/Issues with Peer Review",
    "Conflict of Interest",
    "Contamination of Cell Lines/Tissues",
    "Contamination of Materials",
    "Copyright Claims",
    "Criminal Proceedings",
    "Date of Retraction/Other Unknown",
    "Doing the Right Thing",
    "Duplication of Article",
    "Duplication of Data",
    "Duplication of Image",
    "Duplication of Text",
    "Duplicate Publication through Error by Journal/Publisher",
    "EOC Lifted",
    "Error by Journal/Publisher",
    "Error by Third Party",
    "Error in Analyses",
    "Error in Cell Lines/Tissues",
    "Error in Data",
    "Error in Image",
    "Error in Materials (General)",
    "Error in Methods",
    "Error in Results and/or Conclusions",
    "Error in Text",
    "Ethical Violations by Author",
    "Ethical Violations by Third Party",
    "Euphemisms for Duplication",
    "Euphemisms for Misconduct",
    "Euphemisms for Plagiarism",
    "Fake Peer Review",
    "Falsification/Fabrication of Data",
    "Falsification/Fabrication of Image",
    "Falsification/Fabrication of Results",
    "Forged Authorship",
    "Hoax Paper",
    "Informed/Patient Consent – None/Withdrawn",
    "Investigation by Company/Institution",
    "Investigation by Journal/Publisher",
    "Investigation by ORI",
    "Investigation by Third Party",
    "Lack of Approval from Author",
    "Lack of Approval from Company/Institution",
    "Lack of Approval from Third Party",
    "Lack of IRB/IACUC Approval",
    "Legal Reasons/Legal Threats",
    "Manipulation of Images",
    "Manipulation of Results",
    "Miscommunication by Author",
    "Miscommunication by Company/Institution",
    "Miscommunication by Journal/Publisher",
    "Miscommunication by Third Party",
    "Misconduct – Official Investigation/Finding",
    "Misconduct by Author",
    "Misconduct by Company/Institution",
    "Misconduct by Third Party",
    "No Further Action",
    "Nonpayment of Fees/Refusal to Pay",
    "Notice – Lack of",
    "Notice – Limited or No Information",
    "Notice – Unable to Access via current resources",
    "Objections by Author(s)",
    "Objections by Company/Institution",
    "Objections by Third Party",
    "Original Data not Provided",
    "Paper Mill",
    "Plagiarism of Article",
    "Plagiarism of Data",
    "Plagiarism of Image",
    "Plagiarism of Text",
    "Publishing Ban",
    "Randomly Generated Content",
    "Results Not Reproducible",
    "Retract and Replace",
    "Rogue Editor",
    "Sabotage of Materials",
    "Sabotage of Methods",
    "Salami Slicing",
    "Taken from Dissertation/Thesis",
    "Temporary Removal",
    "Transfer of Copyright/Ownership",
    "Unreliable Data",
    "Unreliable Image",
    "Unreliable Results",
    "Updated to Correction",
    "Updated to Retraction",
    "Upgrade/Update of Prior Notice",
    "Removed",
    "Withdrawn (out of date)",
    "Withdrawn to Publish in Different Journal",
];
