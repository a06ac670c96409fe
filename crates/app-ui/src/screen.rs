//! Screens and their parameters
//!
//! Every navigable view is named by a [`ScreenId`]. Each id declares the
//! parameters it requires through a static schema, and [`Screen`] is the typed
//! form of a validated (id, params) pair: one variant per id, each carrying its
//! own fields.
//!
//! Untyped [`Params`] arrive from UI event handlers. [`validate`] checks them
//! against the schema (presence, primitive type, no unexpected fields) and
//! [`Screen::from_params`] turns them into a [`Screen`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Screen Identifiers
// =============================================================================

/// All screens in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScreenId {
    // Auth
    /// Sign-in form
    Login,
    /// Account creation
    Register,
    /// Password reset request
    ForgotPassword,

    // Browse
    /// Authenticated landing screen
    Home,
    /// Video and subject search
    Search,
    /// Videos for a subject
    SubjectDetail,

    // Videos
    /// Video summary and metadata
    VideoDetail,
    /// Full-screen playback
    VideoPlayer,
    /// Video upload form
    Upload,

    // Learning paths
    /// All learning paths
    LearningPaths,
    /// A single learning path
    LearningPathDetail,

    // Quizzes
    /// Quiz for a subject
    Quiz,
    /// Score summary after a quiz
    QuizResult,

    // Account
    /// Own profile
    Profile,
    /// Profile editor
    EditProfile,
    /// App settings
    Settings,
}

/// A screen name outside the closed set of [`ScreenId`]s
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown screen: {0}")]
pub struct UnknownScreen(pub String);

impl ScreenId {
    /// Every screen, in declaration order
    pub const ALL: [ScreenId; 16] = [
        ScreenId::Login,
        ScreenId::Register,
        ScreenId::ForgotPassword,
        ScreenId::Home,
        ScreenId::Search,
        ScreenId::SubjectDetail,
        ScreenId::VideoDetail,
        ScreenId::VideoPlayer,
        ScreenId::Upload,
        ScreenId::LearningPaths,
        ScreenId::LearningPathDetail,
        ScreenId::Quiz,
        ScreenId::QuizResult,
        ScreenId::Profile,
        ScreenId::EditProfile,
        ScreenId::Settings,
    ];

    /// Stable name used by event handlers and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenId::Login => "login",
            ScreenId::Register => "register",
            ScreenId::ForgotPassword => "forgotPassword",
            ScreenId::Home => "home",
            ScreenId::Search => "search",
            ScreenId::SubjectDetail => "subjectDetail",
            ScreenId::VideoDetail => "videoDetail",
            ScreenId::VideoPlayer => "videoPlayer",
            ScreenId::Upload => "upload",
            ScreenId::LearningPaths => "learningPaths",
            ScreenId::LearningPathDetail => "learningPathDetail",
            ScreenId::Quiz => "quiz",
            ScreenId::QuizResult => "quizResult",
            ScreenId::Profile => "profile",
            ScreenId::EditProfile => "editProfile",
            ScreenId::Settings => "settings",
        }
    }

    /// Get a display title for this screen
    pub fn title(&self) -> &'static str {
        match self {
            ScreenId::Login => "Log In",
            ScreenId::Register => "Create Account",
            ScreenId::ForgotPassword => "Reset Password",
            ScreenId::Home => "Home",
            ScreenId::Search => "Search",
            ScreenId::SubjectDetail => "Subject",
            ScreenId::VideoDetail => "Video",
            ScreenId::VideoPlayer => "Now Playing",
            ScreenId::Upload => "Upload Video",
            ScreenId::LearningPaths => "Learning Paths",
            ScreenId::LearningPathDetail => "Learning Path",
            ScreenId::Quiz => "Quiz",
            ScreenId::QuizResult => "Quiz Results",
            ScreenId::Profile => "Profile",
            ScreenId::EditProfile => "Edit Profile",
            ScreenId::Settings => "Settings",
        }
    }

    /// Parameters this screen accepts
    ///
    /// An empty schema means the screen accepts no parameters at all.
    pub fn schema(&self) -> &'static [FieldSpec] {
        match self {
            ScreenId::Search => SEARCH_SCHEMA,
            ScreenId::SubjectDetail | ScreenId::Quiz => SUBJECT_SCHEMA,
            ScreenId::VideoDetail => VIDEO_SCHEMA,
            ScreenId::VideoPlayer => VIDEO_PLAYER_SCHEMA,
            ScreenId::LearningPathDetail => PATH_SCHEMA,
            ScreenId::QuizResult => QUIZ_RESULT_SCHEMA,
            ScreenId::Login
            | ScreenId::Register
            | ScreenId::ForgotPassword
            | ScreenId::Home
            | ScreenId::Upload
            | ScreenId::LearningPaths
            | ScreenId::Profile
            | ScreenId::EditProfile
            | ScreenId::Settings => &[],
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScreenId {
    type Err = UnknownScreen;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScreenId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownScreen(s.to_string()))
    }
}

// =============================================================================
// Parameter Schemas
// =============================================================================

/// Primitive type of a screen parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// UTF-8 string
    String,
    /// Whole number
    Integer,
    /// true/false
    Boolean,
}

impl FieldType {
    /// Check whether a value has this type
    pub fn accepts(&self, value: &ParamValue) -> bool {
        matches!(
            (self, value),
            (FieldType::String, ParamValue::String(_))
                | (FieldType::Integer, ParamValue::Integer(_))
                | (FieldType::Boolean, ParamValue::Bool(_))
        )
    }

    fn name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declaration of one named screen parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name as passed by callers
    pub name: &'static str,
    /// Expected primitive type
    pub ty: FieldType,
    /// Whether the field must be present
    pub required: bool,
}

impl FieldSpec {
    /// A field that must be present
    pub const fn required(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: true,
        }
    }

    /// A field that may be omitted
    pub const fn optional(name: &'static str, ty: FieldType) -> Self {
        Self {
            name,
            ty,
            required: false,
        }
    }
}

const SEARCH_SCHEMA: &[FieldSpec] = &[FieldSpec::optional("query", FieldType::String)];

const SUBJECT_SCHEMA: &[FieldSpec] = &[FieldSpec::required("subjectId", FieldType::String)];

const VIDEO_SCHEMA: &[FieldSpec] = &[FieldSpec::required("videoId", FieldType::String)];

const VIDEO_PLAYER_SCHEMA: &[FieldSpec] = &[
    FieldSpec::required("videoId", FieldType::String),
    FieldSpec::required("videoUrl", FieldType::String),
    FieldSpec::required("title", FieldType::String),
    FieldSpec::required("pathId", FieldType::String),
    FieldSpec::optional("autoplay", FieldType::Boolean),
];

const PATH_SCHEMA: &[FieldSpec] = &[FieldSpec::required("pathId", FieldType::String)];

const QUIZ_RESULT_SCHEMA: &[FieldSpec] = &[
    FieldSpec::required("subjectId", FieldType::String),
    FieldSpec::required("score", FieldType::Integer),
    FieldSpec::required("total", FieldType::Integer),
];

// =============================================================================
// Parameters
// =============================================================================

/// A primitive parameter value
///
/// Serialized untagged, so a JSON object of primitives deserializes directly
/// into [`Params`]. Integral JSON numbers become [`ParamValue::Integer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

impl ParamValue {
    /// Name of this value's type, as used in validation messages
    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Bool(_) => "boolean",
            ParamValue::Integer(_) => "integer",
            ParamValue::Float(_) => "float",
            ParamValue::String(_) => "string",
        }
    }

    /// Get the string value, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ParamValue::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Integer(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Integer(value.into())
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Named parameters passed to a screen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, ParamValue>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a parameter
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a parameter by name
    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.0.get(name)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameter names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterate over (name, value) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// =============================================================================
// Validation
// =============================================================================

/// A single problem with a screen's parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    /// A required field was not supplied
    Missing {
        /// Field name
        field: String,
        /// Declared type
        expected: FieldType,
    },
    /// A field was supplied with the wrong primitive type
    WrongType {
        /// Field name
        field: String,
        /// Declared type
        expected: FieldType,
        /// Type actually supplied
        found: &'static str,
    },
    /// A field the screen does not declare
    Unexpected {
        /// Field name
        field: String,
    },
}

impl FieldIssue {
    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            FieldIssue::Missing { field, .. }
            | FieldIssue::WrongType { field, .. }
            | FieldIssue::Unexpected { field } => field,
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing { field, expected } => {
                write!(f, "missing {} field `{}`", expected, field)
            }
            FieldIssue::WrongType {
                field,
                expected,
                found,
            } => write!(f, "field `{}` should be {} but was {}", field, expected, found),
            FieldIssue::Unexpected { field } => write!(f, "unexpected field `{}`", field),
        }
    }
}

/// Parameters rejected for a screen
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid parameters for {screen}: {}", join_issues(.issues))]
pub struct ValidationError {
    /// Screen the parameters were meant for
    pub screen: ScreenId,
    /// Every problem found, in schema order then unexpected fields
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    /// Names of all offending fields
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(FieldIssue::field).collect()
    }
}

fn join_issues(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check parameters against a screen's schema
///
/// Collects every issue rather than stopping at the first one.
pub fn validate(screen: ScreenId, params: &Params) -> Result<(), ValidationError> {
    let schema = screen.schema();
    let mut issues = Vec::new();

    for spec in schema {
        match params.get(spec.name) {
            None if spec.required => issues.push(FieldIssue::Missing {
                field: spec.name.to_string(),
                expected: spec.ty,
            }),
            Some(value) if !spec.ty.accepts(value) => issues.push(FieldIssue::WrongType {
                field: spec.name.to_string(),
                expected: spec.ty,
                found: value.kind(),
            }),
            _ => {}
        }
    }

    for name in params.names() {
        if !schema.iter().any(|spec| spec.name == name) {
            issues.push(FieldIssue::Unexpected {
                field: name.to_string(),
            });
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { screen, issues })
    }
}

/// Typed access to already-validated parameters
struct Fields<'a> {
    screen: ScreenId,
    params: &'a Params,
}

impl Fields<'_> {
    fn string(&self, name: &str) -> Result<String, ValidationError> {
        self.opt_string(name)?
            .ok_or_else(|| self.issue(name, FieldType::String))
    }

    fn opt_string(&self, name: &str) -> Result<Option<String>, ValidationError> {
        match self.params.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(|s| Some(s.to_string()))
                .ok_or_else(|| self.issue(name, FieldType::String)),
        }
    }

    fn opt_bool(&self, name: &str) -> Result<Option<bool>, ValidationError> {
        match self.params.get(name) {
            None => Ok(None),
            Some(ParamValue::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(self.issue(name, FieldType::Boolean)),
        }
    }

    fn integer(&self, name: &str) -> Result<i64, ValidationError> {
        self.params
            .get(name)
            .and_then(ParamValue::as_i64)
            .ok_or_else(|| self.issue(name, FieldType::Integer))
    }

    fn issue(&self, name: &str, expected: FieldType) -> ValidationError {
        let issue = match self.params.get(name) {
            Some(value) => FieldIssue::WrongType {
                field: name.to_string(),
                expected,
                found: value.kind(),
            },
            None => FieldIssue::Missing {
                field: name.to_string(),
                expected,
            },
        };
        ValidationError {
            screen: self.screen,
            issues: vec![issue],
        }
    }
}

// =============================================================================
// Typed Screens
// =============================================================================

/// A screen together with its typed parameters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Sign-in form
    Login,
    /// Account creation
    Register,
    /// Password reset request
    ForgotPassword,
    /// Authenticated landing screen
    Home,
    /// Search, optionally pre-filled
    Search {
        /// Initial query
        query: Option<String>,
    },
    /// Videos for a subject
    SubjectDetail {
        /// Subject identifier
        subject_id: String,
    },
    /// Video summary
    VideoDetail {
        /// Video identifier
        video_id: String,
    },
    /// Playback within a learning path
    VideoPlayer {
        /// Video identifier
        video_id: String,
        /// Playable stream URL
        video_url: String,
        /// Title shown over the player
        title: String,
        /// Learning path the video belongs to
        path_id: String,
        /// Start playing without a tap; the player decides when absent
        autoplay: Option<bool>,
    },
    /// Video upload form
    Upload,
    /// All learning paths
    LearningPaths,
    /// A single learning path
    LearningPathDetail {
        /// Learning path identifier
        path_id: String,
    },
    /// Quiz for a subject
    Quiz {
        /// Subject identifier
        subject_id: String,
    },
    /// Score summary
    QuizResult {
        /// Subject identifier
        subject_id: String,
        /// Correct answers
        score: i64,
        /// Number of questions
        total: i64,
    },
    /// Own profile
    Profile,
    /// Profile editor
    EditProfile,
    /// App settings
    Settings,
}

impl Screen {
    /// Build a typed screen from untyped parameters
    ///
    /// Fails with every schema violation found; nothing is built unless all
    /// fields check out.
    pub fn from_params(screen: ScreenId, params: &Params) -> Result<Self, ValidationError> {
        validate(screen, params)?;
        let fields = Fields { screen, params };

        Ok(match screen {
            ScreenId::Login => Screen::Login,
            ScreenId::Register => Screen::Register,
            ScreenId::ForgotPassword => Screen::ForgotPassword,
            ScreenId::Home => Screen::Home,
            ScreenId::Search => Screen::Search {
                query: fields.opt_string("query")?,
            },
            ScreenId::SubjectDetail => Screen::SubjectDetail {
                subject_id: fields.string("subjectId")?,
            },
            ScreenId::VideoDetail => Screen::VideoDetail {
                video_id: fields.string("videoId")?,
            },
            ScreenId::VideoPlayer => Screen::VideoPlayer {
                video_id: fields.string("videoId")?,
                video_url: fields.string("videoUrl")?,
                title: fields.string("title")?,
                path_id: fields.string("pathId")?,
                autoplay: fields.opt_bool("autoplay")?,
            },
            ScreenId::Upload => Screen::Upload,
            ScreenId::LearningPaths => Screen::LearningPaths,
            ScreenId::LearningPathDetail => Screen::LearningPathDetail {
                path_id: fields.string("pathId")?,
            },
            ScreenId::Quiz => Screen::Quiz {
                subject_id: fields.string("subjectId")?,
            },
            ScreenId::QuizResult => Screen::QuizResult {
                subject_id: fields.string("subjectId")?,
                score: fields.integer("score")?,
                total: fields.integer("total")?,
            },
            ScreenId::Profile => Screen::Profile,
            ScreenId::EditProfile => Screen::EditProfile,
            ScreenId::Settings => Screen::Settings,
        })
    }

    /// The identifier of this screen
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::Login => ScreenId::Login,
            Screen::Register => ScreenId::Register,
            Screen::ForgotPassword => ScreenId::ForgotPassword,
            Screen::Home => ScreenId::Home,
            Screen::Search { .. } => ScreenId::Search,
            Screen::SubjectDetail { .. } => ScreenId::SubjectDetail,
            Screen::VideoDetail { .. } => ScreenId::VideoDetail,
            Screen::VideoPlayer { .. } => ScreenId::VideoPlayer,
            Screen::Upload => ScreenId::Upload,
            Screen::LearningPaths => ScreenId::LearningPaths,
            Screen::LearningPathDetail { .. } => ScreenId::LearningPathDetail,
            Screen::Quiz { .. } => ScreenId::Quiz,
            Screen::QuizResult { .. } => ScreenId::QuizResult,
            Screen::Profile => ScreenId::Profile,
            Screen::EditProfile => ScreenId::EditProfile,
            Screen::Settings => ScreenId::Settings,
        }
    }

    /// Untyped parameters for this screen
    pub fn params(&self) -> Params {
        match self {
            Screen::Search { query } => match query {
                Some(q) => Params::new().with("query", q.as_str()),
                None => Params::new(),
            },
            Screen::SubjectDetail { subject_id } | Screen::Quiz { subject_id } => {
                Params::new().with("subjectId", subject_id.as_str())
            }
            Screen::VideoDetail { video_id } => Params::new().with("videoId", video_id.as_str()),
            Screen::VideoPlayer {
                video_id,
                video_url,
                title,
                path_id,
                autoplay,
            } => {
                let params = Params::new()
                    .with("videoId", video_id.as_str())
                    .with("videoUrl", video_url.as_str())
                    .with("title", title.as_str())
                    .with("pathId", path_id.as_str());
                match autoplay {
                    Some(flag) => params.with("autoplay", *flag),
                    None => params,
                }
            }
            Screen::LearningPathDetail { path_id } => {
                Params::new().with("pathId", path_id.as_str())
            }
            Screen::QuizResult {
                subject_id,
                score,
                total,
            } => Params::new()
                .with("subjectId", subject_id.as_str())
                .with("score", *score)
                .with("total", *total),
            Screen::Login
            | Screen::Register
            | Screen::ForgotPassword
            | Screen::Home
            | Screen::Upload
            | Screen::LearningPaths
            | Screen::Profile
            | Screen::EditProfile
            | Screen::Settings => Params::new(),
        }
    }

    /// Get a display title for this screen
    pub fn title(&self) -> &'static str {
        self.id().title()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_params(screen: ScreenId) -> Params {
        screen
            .schema()
            .iter()
            .map(|spec| {
                let value = match spec.ty {
                    FieldType::String => ParamValue::from("sample"),
                    FieldType::Integer => ParamValue::from(7),
                    FieldType::Boolean => ParamValue::from(true),
                };
                (spec.name, value)
            })
            .collect()
    }

    #[test]
    fn test_screen_id_names_round_trip() {
        for id in ScreenId::ALL {
            assert_eq!(id.as_str().parse::<ScreenId>(), Ok(id));
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn test_unknown_screen_name() {
        assert_eq!(
            "videoDetails".parse::<ScreenId>(),
            Err(UnknownScreen("videoDetails".to_string()))
        );
    }

    #[test]
    fn test_screen_id_serde_matches_names() {
        for id in ScreenId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_every_schema_builds_its_screen() {
        for id in ScreenId::ALL {
            let params = sample_params(id);
            let screen = Screen::from_params(id, &params).unwrap();
            assert_eq!(screen.id(), id);
            assert_eq!(screen.params(), params);
        }
    }

    #[test]
    fn test_video_detail_from_params() {
        let params = Params::new().with("videoId", "abc");
        assert_eq!(
            Screen::from_params(ScreenId::VideoDetail, &params),
            Ok(Screen::VideoDetail {
                video_id: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_compound_schema_reports_all_missing_fields() {
        let params = Params::new().with("videoId", "abc");
        let err = Screen::from_params(ScreenId::VideoPlayer, &params).unwrap_err();
        assert_eq!(err.screen, ScreenId::VideoPlayer);
        assert_eq!(err.fields(), vec!["videoUrl", "title", "pathId"]);
        assert!(err
            .issues
            .iter()
            .all(|issue| matches!(issue, FieldIssue::Missing { .. })));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let params = Params::new().with("subjectId", 42);
        let err = Screen::from_params(ScreenId::Quiz, &params).unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::WrongType {
                field: "subjectId".to_string(),
                expected: FieldType::String,
                found: "integer",
            }]
        );
        assert_eq!(
            err.to_string(),
            "Invalid parameters for quiz: field `subjectId` should be string but was integer"
        );
    }

    #[test]
    fn test_parameterless_screen_rejects_params() {
        let params = Params::new().with("videoId", "abc");
        let err = validate(ScreenId::Home, &params).unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::Unexpected {
                field: "videoId".to_string()
            }]
        );
    }

    #[test]
    fn test_optional_field() {
        assert_eq!(
            Screen::from_params(ScreenId::Search, &Params::new()),
            Ok(Screen::Search { query: None })
        );
        assert_eq!(
            Screen::from_params(ScreenId::Search, &Params::new().with("query", "algebra")),
            Ok(Screen::Search {
                query: Some("algebra".to_string())
            })
        );
        assert!(Screen::from_params(ScreenId::Search, &Params::new().with("query", false)).is_err());
    }

    #[test]
    fn test_quiz_result_integers() {
        let params = Params::new()
            .with("subjectId", "math")
            .with("score", 8)
            .with("total", 10.0);
        let err = Screen::from_params(ScreenId::QuizResult, &params).unwrap_err();
        assert_eq!(err.fields(), vec!["total"]);
    }

    #[test]
    fn test_video_player_autoplay_flag() {
        let base = Params::new()
            .with("videoId", "v1")
            .with("videoUrl", "https://cdn.example.com/v1.m3u8")
            .with("title", "Cells")
            .with("pathId", "bio-1");

        let screen = Screen::from_params(ScreenId::VideoPlayer, &base).unwrap();
        assert!(matches!(screen, Screen::VideoPlayer { autoplay: None, .. }));
        assert_eq!(screen.params(), base);

        let params = base.clone().with("autoplay", false);
        let screen = Screen::from_params(ScreenId::VideoPlayer, &params).unwrap();
        assert!(matches!(
            screen,
            Screen::VideoPlayer {
                autoplay: Some(false),
                ..
            }
        ));
        assert_eq!(screen.params(), params);

        let err = Screen::from_params(ScreenId::VideoPlayer, &base.with("autoplay", "yes"))
            .unwrap_err();
        assert_eq!(
            err.issues,
            vec![FieldIssue::WrongType {
                field: "autoplay".to_string(),
                expected: FieldType::Boolean,
                found: "string",
            }]
        );
    }

    #[test]
    fn test_field_types_are_strict() {
        assert!(FieldType::Integer.accepts(&ParamValue::Integer(3)));
        assert!(!FieldType::Integer.accepts(&ParamValue::Float(3.5)));
        assert!(FieldType::Boolean.accepts(&ParamValue::Bool(true)));
        assert!(!FieldType::Boolean.accepts(&ParamValue::from("true")));
    }

    #[test]
    fn test_params_from_json_object() {
        let params: Params =
            serde_json::from_str(r#"{"subjectId":"x","score":3,"ratio":0.5,"done":true}"#).unwrap();
        assert_eq!(params.get("subjectId"), Some(&ParamValue::from("x")));
        assert_eq!(params.get("score"), Some(&ParamValue::Integer(3)));
        assert_eq!(params.get("ratio"), Some(&ParamValue::Float(0.5)));
        assert_eq!(params.get("done"), Some(&ParamValue::Bool(true)));
    }

    #[test]
    fn test_screen_title() {
        assert_eq!(Screen::Home.title(), "Home");
        assert_eq!(
            Screen::Quiz {
                subject_id: "x".to_string()
            }
            .title(),
            "Quiz"
        );
    }
}
