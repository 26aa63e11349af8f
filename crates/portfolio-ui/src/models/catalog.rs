//! Built-in project catalog
//!
//! The section ships with a fixed list; nothing here is fetched or persisted.

use super::project::Project;

/// The portfolio's projects, in display order
#[must_use]
pub fn projects() -> Vec<Project> {
    vec![
        Project::new("Redesign Nubank")
            .with_description(
                "Uma nova identidade visual para o Nubank, combinando modernidade e \
                 simplicidade para uma experiência mais envolvente.",
            )
            .with_image("/nubank.svg?height=600&width=800")
            .with_tags(["HTML", "CSS", "JavaScript", "SASS"])
            .with_demo_url("https://projeto-nubank-chi.vercel.app")
            .with_repo_url("https://github.com/PedroDutra86/Projeto_Nubank")
            .featured(),
        Project::new("HDI - Disease Tracker API")
            .with_description(
                "É uma aplicação desenvolvida com FastAPI para fornecer acesso estruturado e \
                 performático aos dados epidemiológicos tratados pela plataforma Health Data \
                 Insights. Esta API consome arquivos Parquet previamente limpos e traduzidos, \
                 expondo endpoints que permitem consultas filtradas sobre notificações de \
                 doenças, com foco inicial nos casos de dengue registrados no Brasil.",
            )
            .with_image("/API.png?height=600&width=800")
            .with_tags(["Python", "FastAPI", "Docker"])
            .with_demo_url("https://hdi-disease-tracker-api.onrender.com/dengue")
            .with_repo_url("https://github.com/PedroDutra86/hdi-disease-tracker-api")
            .featured(),
        Project::new("HDI - Disease Tracker")
            .with_description(
                "É uma aplicação Python projetada para automatizar o processo de ingestão, \
                 limpeza e tradução de dados epidemiológicos brutos em formato Parquet. Esta \
                 ferramenta serve como base para a alimentação da HDI Disease Tracker API, \
                 facilitando a padronização e disseminação de informações relacionadas a \
                 doenças notificadas no Brasil.",
            )
            .with_image("/diseasetracker.png?height=600&width=800")
            .with_tags(["Python", "Pandas", "Numpy"])
            .with_repo_url("https://github.com/PedroDutra86/hdi-disease-tracker"),
    ]
}
