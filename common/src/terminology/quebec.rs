//! Built-in Quebec French terminology for property-management copy.
//!
//! Entries cover English words that leak into French screens, anglicisms
//! the Office québécois de la langue française advises against, and common
//! unaccented spellings.

use super::map::{TerminologyMap, normalise_term};

const QUEBEC_FRENCH_TERMS: &[(&str, &str)] = &[
    // English leaking into French screens.
    ("bill", "facture"),
    ("bills", "factures"),
    ("building", "immeuble"),
    ("buildings", "immeubles"),
    ("cancel", "annuler"),
    ("common areas", "espaces communs"),
    ("dashboard", "tableau de bord"),
    ("deadline", "échéance"),
    ("delete", "supprimer"),
    ("download", "télécharger"),
    ("due date", "date d'échéance"),
    ("e-mail", "courriel"),
    ("email", "courriel"),
    ("feedback", "rétroaction"),
    ("invoice", "facture"),
    ("landlord", "propriétaire"),
    ("lease", "bail"),
    ("lease agreement", "contrat de bail"),
    ("log in", "se connecter"),
    ("login", "connexion"),
    ("logout", "déconnexion"),
    ("maintenance request", "demande d'entretien"),
    ("manager", "gestionnaire"),
    ("meeting", "réunion"),
    ("parking", "stationnement"),
    ("password", "mot de passe"),
    ("property manager", "gestionnaire immobilier"),
    ("save", "enregistrer"),
    ("settings", "paramètres"),
    ("submit", "soumettre"),
    ("tenant", "locataire"),
    ("tenants", "locataires"),
    ("update", "mettre à jour"),
    ("upload", "téléverser"),
    ("user", "utilisateur"),
    ("username", "nom d'utilisateur"),
    ("users", "utilisateurs"),
    ("zip code", "code postal"),
    // Anglicisms and France-French usage discouraged in Quebec.
    ("à date", "jusqu'à maintenant"),
    ("appliquer pour", "postuler"),
    ("canceller", "annuler"),
    ("cellphone", "cellulaire"),
    ("céduler", "planifier"),
    ("chambre de bain", "salle de bain"),
    ("checker", "vérifier"),
    ("shopping", "magasinage"),
    ("week-end", "fin de semaine"),
    ("weekend", "fin de semaine"),
    // Missing accents.
    ("batiment", "bâtiment"),
    ("echeance", "échéance"),
    ("gestionaire", "gestionnaire"),
    ("parametres", "paramètres"),
    ("residence", "résidence"),
    ("residences", "résidences"),
    ("role", "rôle"),
];

impl TerminologyMap {
    /// The built-in Quebec French terminology map.
    ///
    /// ```
    /// use lexique_common::TerminologyMap;
    ///
    /// let map = TerminologyMap::quebec_french();
    /// assert_eq!(map.get("parking"), Some("stationnement"));
    /// assert_eq!(map.get("Property Manager"), Some("gestionnaire immobilier"));
    /// ```
    #[must_use]
    pub fn quebec_french() -> Self {
        Self::from_normalised(
            QUEBEC_FRENCH_TERMS
                .iter()
                .map(|(term, suggestion)| (normalise_term(term), (*suggestion).to_owned()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn every_builtin_entry_passes_insertion_rules() {
        let rebuilt = TerminologyMap::from_pairs(QUEBEC_FRENCH_TERMS.iter().copied())
            .unwrap_or_else(|error| panic!("built-in entry rejected: {error}"));

        assert_eq!(rebuilt, TerminologyMap::quebec_french());
    }

    #[rstest]
    fn builtin_terms_are_unique() {
        assert_eq!(
            TerminologyMap::quebec_french().len(),
            QUEBEC_FRENCH_TERMS.len()
        );
    }
}
