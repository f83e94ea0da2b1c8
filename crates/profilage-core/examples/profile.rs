use profilage_core::{
    Lexicons, ProfilePipeline, RawSpan, SpanLabel, Tagger, TaggerResult,
};

const CV_TEXT: &str = "\
Camille Moreau
Email : camille.moreau@exemple.fr / Tél : 06 12 34 56 78
Expérience Professionnelle : Chef de projet, Ingénieur cybersécurité
Master Informatique, Université de Lyon
Compétences : Cloud Computing, pythn, Docker
Anglais : Courant
Espagnol : B2
";

// Stand-ins for the real NER backends; a production integration would wrap
// its inference runtime behind the same trait.
struct GenericNer;

impl Tagger for GenericNer {
    fn predict(&self, _text: &str) -> TaggerResult<Vec<RawSpan>> {
        Ok(vec![
            RawSpan::generic("Camille Moreau", SpanLabel::Person),
            RawSpan::generic("Lyon", SpanLabel::Location),
            RawSpan::generic("Université", SpanLabel::Location),
            RawSpan::generic("pythn", SpanLabel::Misc),
        ])
    }
}

struct DomainNer;

impl Tagger for DomainNer {
    fn predict(&self, _text: &str) -> TaggerResult<Vec<RawSpan>> {
        Ok(vec![
            RawSpan::fine_tuned("Camille Moreau Chef de projet", SpanLabel::Experience),
            RawSpan::fine_tuned("Ingénieur cybersécurité", SpanLabel::Experience),
            RawSpan::fine_tuned("Master Informatique", SpanLabel::Credential),
            RawSpan::fine_tuned("Cloud Computing", SpanLabel::Competence),
            RawSpan::fine_tuned("Docker", SpanLabel::Competence),
        ])
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let pipeline = ProfilePipeline::with_lexicons(
        Box::new(GenericNer),
        Box::new(DomainNer),
        Lexicons::french(),
    )?;

    let output = pipeline.process(CV_TEXT)?;

    println!("{}", serde_json::to_string_pretty(&output.profile)?);
    println!("\nclassifier input: {}", output.classifier_text());
    println!(
        "spans: {} | duration: {}ms",
        output.stats.raw_spans, output.stats.duration_ms
    );

    Ok(())
}
