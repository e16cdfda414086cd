//! Built-in fixture catalog.
//!
//! 24 positive cases, 10 negative/edge cases and one incremental-UI
//! scenario, all targeting the live translator page. Inputs and expected
//! outputs are byte-exact: several entries deliberately carry doubled
//! spaces, trailing spaces or an embedded newline, and the runner compares
//! without any normalization.

use once_cell::sync::Lazy;

use crate::fixture::{Category, Fixture, FixtureError, Grammar, LengthClass, UiFixture};

#[allow(clippy::too_many_arguments)]
fn fx(
    tc_id: &str,
    name: &str,
    input: &str,
    expected: &str,
    category: Category,
    grammar: Grammar,
    length: LengthClass,
) -> Fixture {
    Fixture {
        tc_id: tc_id.into(),
        name: name.into(),
        input: input.into(),
        expected: expected.into(),
        category,
        grammar,
        length,
    }
}

/// Positive functional cases: well-formed Singlish the target should
/// transliterate cleanly.
pub static POSITIVE: Lazy<Vec<Fixture>> = Lazy::new(|| {
    vec![
        fx(
            "Pos_Fun_0001",
            "Convert a simple sentence",
            "mama aluth pothak ganna kadeta yanavaa.",
            "මම අලුත් පොතක් ගන්න කඩෙට යනවා.",
            Category::DailyLanguage,
            Grammar::SimpleSentence,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0002",
            "Convert a compound sentence",
            "api meka liyalaa ivara karamu iita passe kanna yamu.",
            "අපි මෙක ලියලා ඉවර කරමු ඊට පස්සෙ කන්න යමු.",
            Category::DailyLanguage,
            Grammar::CompoundSentence,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0003",
            "Convert a complex sentence",
            "heta oyaa pansalata yanavanam maath enavaa.",
            "හෙට ඔයා පන්සලට යනවනම් මාත් එනවා.",
            Category::DailyLanguage,
            Grammar::ComplexSentence,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0004",
            "Short mixed Singlish + English request",
            "heta iskoleta edhdhi oyaage science  potha aragena enna puLuvandha?",
            "හෙට ඉස්කොලෙට එද්දි ඔයාගෙ science  පොත අරගෙන එන්න පුළුවන්ද?",
            Category::MixedSinglishEnglish,
            Grammar::Interrogative,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0005",
            "Short Greeting",
            "obata niroogii vasanaavantha subama suba  aluth avurudhdhak veevaa!",
            "ඔබට නිරෝගී වසනාවන්ත සුබම සුබ  අලුත් අවුරුද්දක් වේවා!",
            Category::GreetingRequestResponse,
            Grammar::SimpleSentence,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0006",
            "Convert an imperative  sentence",
            "meese uda thiyena vathura boothalaya aran enna.",
            "මේසෙ උඩ තියෙන වතුර බෝතලය අරන් එන්න.",
            Category::GreetingRequestResponse,
            Grammar::Imperative,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0007",
            "Convert negative sentence",
            "iiye apita liyanna dhunna rachanaava mama liyalaa ivara karee naehae.",
            "ඊයෙ අපිට ලියන්න දුන්න රචනාව මම ලියලා ඉවර කරේ නැහැ.",
            Category::DailyLanguage,
            Grammar::Negation,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0008",
            "Convert a short response",
            "ov, oyaa kiyapu vaeda tika mama karalaa ivara karaa.",
            "ඔව්, ඔයා කියපු වැඩ ටික මම කරලා ඉවර කරා.",
            Category::GreetingRequestResponse,
            Grammar::PastTense,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0009",
            "Convert repeated word phrase",
            "ov ov, heta udheeta api hemin hemin aevidhalaa yamu.",
            "ඔව් ඔව්, හෙට උදේට අපි හෙමින් හෙමින් ඇවිදලා යමු.",
            Category::PhrasePattern,
            Grammar::FutureTense,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0010",
            "Convert mixed Singlish + English past tense",
            "iiye api museum eka balanna giyaa.",
            "ඊයෙ අපි museum එක බලන්න ගියා.",
            Category::MixedSinglishEnglish,
            Grammar::PastTense,
            LengthClass::S,
        ),
        fx(
            "Pos_Fun_0011",
            "Convert pronoun variation",
            "api baeQQkuvata yamu.",
            "අපි බැංකුවට යමු.",
            Category::DailyLanguage,
            Grammar::PronounVariation,
            LengthClass::S,
        ),
        fx(
            "Pos_Fun_0012",
            "Convert punctuations and numbers",
            "Teacher kivvaa heta udheeta 10.00 am enne kiyalaa, edhdhi Rs.1000 aran ennath kivvaa.",
            "Teacher කිව්වා හෙට උදේට 10.00 am එන්නෙ කියලා, එද්දි Rs.1000 අරන් එන්නත් කිව්වා.",
            Category::PunctuationNumbers,
            Grammar::CompoundSentence,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0013",
            "Convert informal language",
            "ehenam ithin oyaa ooni dheyak karaganna.",
            "එහෙනම් ඉතින් ඔයා ඕනි දෙයක් කරගන්න.",
            Category::SlangInformal,
            Grammar::SimpleSentence,
            LengthClass::S,
        ),
        fx(
            "Pos_Fun_0014",
            "Convert Singlish + English conversation",
            "Heta udheeta Zoom meeting ekak dhaalaa thamayi project eka gaena discuss karanavaa kivve. Oyaata thamayi link eka dhaanavaa kivve link eka dhaemmama matath share karanna puLuvandha? Apita ideas thiyenavaanam eevath podi note ekak dhalaa thiyaganna kivvaa. Meeting ekata velaavata join venna, ikmanata ivara karanavalu. Meeting eka ivara unaata passe oyaa campus enavaa nedha? Campus ekata edhdhi mama illapu notes tikath aran enna saha  PDF tikath mata evanna. Api notes tika complete karalaa lecture ekatath yamu.",
            "හෙට උදේට Zoom meeting එකක් දාලා තමයි project එක ගැන discuss කරනවා කිව්වෙ. ඔයාට තමයි link එක දානවා කිව්වෙ link එක දැම්මම මටත් share කරන්න පුළුවන්ද? අපිට ideas තියෙනවානම් ඒවත් පොඩි note එකක් දලා තියගන්න කිව්වා. Meeting එකට වෙලාවට join වෙන්න, ඉක්මනට ඉවර කරනවලු. Meeting එක ඉවර උනාට පස්සෙ ඔයා campus එනවා නේද? Campus එකට එද්දි මම ඉල්ලපු notes ටිකත් අරන් එන්න සහ  PDF ටිකත් මට එවන්න. අපි notes ටික complete කරලා lecture එකටත් යමු.",
            Category::MixedSinglishEnglish,
            Grammar::CompoundSentence,
            LengthClass::L,
        ),
        fx(
            "Pos_Fun_0015",
            "Format checking",
            "iiye         api         midhula        pirisidhu             karaa.",
            "ඊයෙ         අපි         මිදුල        පිරිසිදු             කරා.",
            Category::Formatting,
            Grammar::PastTense,
            LengthClass::S,
        ),
        fx(
            "Pos_Fun_0016",
            "Convert English names",
            "api dhaen Matara yamu.",
            "අපි දැන් Matara යමු.",
            Category::NamesPlaces,
            Grammar::PresentTense,
            LengthClass::S,
        ),
        fx(
            "Pos_Fun_0017",
            "Convert plural request",
            "karunaakara sathunta kaeema dhiimen vaLakinna.",
            "කරුනාකර සතුන්ට කෑම දීමෙන් වළකින්න.",
            Category::GreetingRequestResponse,
            Grammar::PluralForm,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0018",
            "Convert currency",
            "Rs.1000 aran enna.",
            "Rs.1000 අරන් එන්න.",
            Category::PunctuationNumbers,
            Grammar::Imperative,
            LengthClass::S,
        ),
        fx(
            "Pos_Fun_0019",
            "Informal short phrase",
            "anee mata oyaa  kiyapu potha aran enna baeri unaa.",
            "අනේ මට ඔයා  කියපු පොත අරන් එන්න බැරි උනා.",
            Category::SlangInformal,
            Grammar::PastTense,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0020",
            "Convert common English words",
            "mama university ekata yanna kalin bank ekata yanna ooni.",
            "මම university එකට යන්න කලින් bank එකට යන්න ඕනි.",
            Category::NamesPlaces,
            Grammar::CompoundSentence,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0021",
            "Convert daily large conversations",
            "aeyi adha oyaa school ekata aavee naeththee? apita okkoma subjects igaennuvaa saha homework godak dhunnaa. Science vala quiz ekakuth dhunnaa eka nam aththatama godak amaruyi, hamooma amaruyi kivvaa. Teacher kivvaa godak ayata marks aduyinam aayee next week spot test ekak dhenavaa kivvaa, ekata MCQ 10k saha short answer questions 5k thamyi dhenavaa kivvee. apita dhaen venakam uganvalaa thiyena okkoma balaagena enna kivvaa. heta school edhdhii apee last term exam papers aran enna kivvaa. ",
            "ඇයි අද ඔයා school එකට ආවේ නැත්තේ? අපිට ඔක්කොම subjects ඉගැන්නුවා සහ homework ගොඩක් දුන්නා. Science වල quiz එකකුත් දුන්නා එක නම් අත්තටම ගොඩක් අමරුයි, හමෝම අමරුයි කිව්වා. Teacher කිව්වා ගොඩක් අයට marks අඩුයිනම් ආයේ next week spot test එකක් දෙනවා කිව්වා, එකට MCQ 10ක් සහ short answer questions 5ක් තම්යි දෙනවා කිව්වේ. අපිට දැන් වෙනකම් උගන්වලා තියෙන ඔක්කොම බලාගෙන එන්න කිව්වා. හෙට school එද්දී අපේ last term exam papers අරන් එන්න කිව්වා. ",
            Category::MixedSinglishEnglish,
            Grammar::CompoundSentence,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0022",
            "Unit conversion check",
            "gedhara edhdhi parippu 2Kg aran enna.",
            "ගෙදර එද්දි පරිප්පු 2Kg අරන් එන්න.",
            Category::PunctuationNumbers,
            Grammar::Imperative,
            LengthClass::S,
        ),
        fx(
            "Pos_Fun_0023",
            "Convert Singlish + English negative sentence",
            "Class ekee dhunna homework mama ivara karee naehae.",
            "Class එකේ දුන්න homework මම ඉවර කරේ නැහැ.",
            Category::MixedSinglishEnglish,
            Grammar::Negation,
            LengthClass::M,
        ),
        fx(
            "Pos_Fun_0024",
            "Convert daily language usage",
            "aachchi poLata yanna enna kivvaa.",
            "ආච්චි පොළට යන්න එන්න කිව්වා.",
            Category::GreetingRequestResponse,
            Grammar::SimpleSentence,
            LengthClass::S,
        ),
    ]
});

/// Negative/edge cases: malformed spacing, confusable English words,
/// multi-line input and similar stress inputs. These still assert exact
/// equality; "negative" refers to the input quality, not the assertion.
pub static NEGATIVE: Lazy<Vec<Fixture>> = Lazy::new(|| {
    vec![
        fx(
            "Neg_Fun_0001",
            "Convert sentence without proper spacing",
            "mama kaviyakliyanavaa.",
            "මම කවියක් ලියනවා.",
            Category::TypoHandling,
            Grammar::SimpleSentence,
            LengthClass::S,
        ),
        fx(
            "Neg_Fun_0002",
            "Convert a simple conversation",
            "me potha eyata dhenna.",
            "මේ පොත එයාට දෙන්න.",
            Category::GreetingRequestResponse,
            Grammar::Imperative,
            LengthClass::S,
        ),
        fx(
            "Neg_Fun_0003",
            "Convert daily conversation",
            "oyaa adha aluth adhumak ganna yanavadha?",
            "ඔයා අද අලුත් අඳුමක් ගන්න යනවද?",
            Category::DailyLanguage,
            Grammar::Interrogative,
            LengthClass::M,
        ),
        fx(
            "Neg_Fun_0004",
            "English word confusions",
            "Seeya mallith ekka heta game yanavaa kivvaa.",
            "සීයා මල්ලිත් එක්ක හෙට ගමේ යනවා කිව්වා.",
            Category::TypoHandling,
            Grammar::ComplexSentence,
            LengthClass::L,
        ),
        fx(
            "Neg_Fun_0005",
            "Convert improper capitalization",
            "oyaa edhdhi aluthin aapu cartoon cd eka aran enna puLuvandha?",
            "ඔයා එද්දි අලුතින් ආපු cartoon cd එක අරන් එන්න පුළුවන්ද?",
            Category::MixedSinglishEnglish,
            Grammar::Interrogative,
            LengthClass::M,
        ),
        fx(
            "Neg_Fun_0006",
            "Multi line checking",
            "api dhaen koovilata yanavaa. \n oyath enavadha?",
            "අපි දැන් කෝවිලට යනවා.           ඔයත් එනවද?",
            Category::Formatting,
            Grammar::Interrogative,
            LengthClass::M,
        ),
        fx(
            "Neg_Fun_0007",
            "Fault in names of Common places",
            "apee ratee aganuvara Sri Jayawardenepura Kotte yi.",
            "අපේ රටේ අගනුවර Sri Jayawardenepura Kotte යි.",
            Category::NamesPlaces,
            Grammar::SimpleSentence,
            LengthClass::M,
        ),
        fx(
            "Neg_Fun_0008",
            "Convert reading issue",
            "api project management tools vidhihata Trello saha  Jira paavichchi karaa. ",
            "අපි project management tools විදිහට Trello සහ Jira පාවිච්චි කරා.",
            Category::NamesPlaces,
            Grammar::PastTense,
            LengthClass::M,
        ),
        fx(
            "Neg_Fun_0009",
            "Convert improper spacing",
            "naQQgii kivvaa adha school ekee exam thibbaa  kiyalaa.",
            "නංගී කිව්වා අද school එකේ exam තිබ්බා  කියලා.",
            Category::TypoHandling,
            Grammar::SimpleSentence,
            LengthClass::M,
        ),
        fx(
            "Neg_Fun_0010",
            "Informal language translation",
            "api okkoma ekathuvelaa podi chat ekak dhaagena hitapu nisaa thamayi enna parakku unee.",
            "අපි ඔක්කොම එකතුවෙලා පොඩි chat එකක් දාගෙන හිටපු නිසා තමයි එන්න පරක්කු උනේ.",
            Category::MixedSinglishEnglish,
            Grammar::CompoundSentence,
            LengthClass::M,
        ),
    ]
});

/// The single incremental-typing scenario: after typing only
/// `partial_input` the page must already show some output, and after the
/// remaining keystrokes the rendering must match exactly.
pub static UI: Lazy<UiFixture> = Lazy::new(|| UiFixture {
    fixture: fx(
        "Pos_UI_0001",
        "Checking UI output",
        "adha bus ekee yamu dha?",
        "අද bus එකේ යමු ද?",
        Category::MixedSinglishEnglish,
        Grammar::Interrogative,
        LengthClass::S,
    ),
    partial_input: "adha bus".into(),
});

pub fn positive() -> &'static [Fixture] {
    &POSITIVE
}

pub fn negative() -> &'static [Fixture] {
    &NEGATIVE
}

pub fn ui() -> &'static UiFixture {
    &UI
}

/// All functional fixtures (positive then negative), excluding the UI
/// scenario.
pub fn all_functional() -> impl Iterator<Item = &'static Fixture> {
    POSITIVE.iter().chain(NEGATIVE.iter())
}

/// Validate every catalog entry and check tc_id uniqueness across groups.
pub fn validate() -> Result<(), FixtureError> {
    let mut seen = std::collections::BTreeSet::new();
    for fixture in all_functional().chain(std::iter::once(&UI.fixture)) {
        fixture.validate()?;
        if !seen.insert(fixture.tc_id.as_str()) {
            return Err(FixtureError::DuplicateId(fixture.tc_id.clone()));
        }
    }
    UI.validate()
}
