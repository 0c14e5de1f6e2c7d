//! Phrases used by the discovered-pages (`--complete`) pass: page titles,
//! common labels, days, months.

pub const COMPLETE: &[(&str, &str)] = &[
    // Titles
    ("D&D Session Scheduler", "Pianificatore Sessioni D&D"),
    ("Session Scheduler", "Pianificatore Sessioni"),
    ("Coordinate Your Adventures", "Coordina le Tue Avventure"),
    ("My Dashboard", "La Mia Bacheca"),
    ("Join Session", "Partecipa alla Sessione"),
    ("Create New Campaign", "Crea Nuova Campagna"),
    ("Admin Dashboard", "Pannello Amministrazione"),
    ("Profile", "Profilo"),
    ("Register", "Registrati"),
    ("Login", "Accedi"),
    ("Manage Sessions", "Gestisci Sessioni"),

    // Footer
    ("Crafted with magical precision", "Creato con precisione magica"),
    ("Manage your D&D Session Scheduler", "Gestisci il tuo Pianificatore Sessioni D&D"),
    (
        "Monitor your D&D Session Scheduler platform",
        "Monitora la tua piattaforma Pianificatore Sessioni D&D",
    ),

    // Common phrases
    ("Welcome back", "Bentornato"),
    ("Adventurer", "Avventuriero"),
    ("My Sessions", "Le Mie Sessioni"),
    ("Active Campaigns", "Campagne Attive"),
    ("Recent Activity", "Attività Recente"),
    ("Quick Stats", "Statistiche Rapide"),
    ("Quick Actions", "Azioni Rapide"),

    // Actions
    ("Create Poll", "Crea Sondaggio"),
    ("Start New Campaign", "Inizia Nuova Campagna"),
    ("Join Adventure", "Unisciti all'Avventura"),
    ("View Details", "Vedi Dettagli"),
    ("Edit Session", "Modifica Sessione"),
    ("Delete", "Elimina"),
    ("Save", "Salva"),
    ("Cancel", "Annulla"),
    ("Submit", "Invia"),
    ("Reset", "Ripristina"),
    ("Back", "Indietro"),
    ("Next", "Avanti"),
    ("Previous", "Precedente"),
    ("Finish", "Termina"),

    // Stats
    ("Total Sessions", "Sessioni Totali"),
    ("Active Sessions", "Sessioni Attive"),
    ("Finalized Sessions", "Sessioni Finalizzate"),
    ("Pending Responses", "Risposte in Attesa"),
    ("Response Rate", "Tasso di Risposta"),
    ("Avg Response Rate", "Tasso Risposta Medio"),
    ("Success Rate", "Tasso di Successo"),
    ("Avg. Response Time", "Tempo Risposta Medio"),

    // Messages
    ("Loading...", "Caricamento..."),
    ("No data available", "Nessun dato disponibile"),
    ("No sessions found", "Nessuna sessione trovata"),
    ("No recent activity", "Nessuna attività recente"),
    ("Please wait", "Attendere prego"),
    ("Error", "Errore"),
    ("Success", "Successo"),

    // Form labels
    ("Email", "Email"),
    ("Password", "Password"),
    ("Confirm Password", "Conferma Password"),
    ("Full Name", "Nome Completo"),
    ("Username", "Nome Utente"),
    ("Campaign Name", "Nome Campagna"),
    ("Description", "Descrizione"),
    ("Date", "Data"),
    ("Time", "Ora"),
    ("Location", "Luogo"),
    ("Participants", "Partecipanti"),
    ("Notes", "Note"),

    // Placeholders
    ("Enter your email", "Inserisci la tua email"),
    ("Enter your password", "Inserisci la password"),
    ("Enter campaign name", "Inserisci nome campagna"),
    ("Add description", "Aggiungi descrizione"),
    ("Select date", "Seleziona data"),
    ("Select time", "Seleziona ora"),

    // Status
    ("Active", "Attiva"),
    ("Pending", "In Attesa"),
    ("Finalized", "Finalizzata"),
    ("Cancelled", "Annullata"),
    ("Completed", "Completata"),
    ("Draft", "Bozza"),

    // Time
    ("Today", "Oggi"),
    ("Yesterday", "Ieri"),
    ("Tomorrow", "Domani"),
    ("This Week", "Questa Settimana"),
    ("Last Week", "Settimana Scorsa"),
    ("This Month", "Questo Mese"),
    ("Last Month", "Mese Scorso"),

    // Days
    ("Monday", "Lunedì"),
    ("Tuesday", "Martedì"),
    ("Wednesday", "Mercoledì"),
    ("Thursday", "Giovedì"),
    ("Friday", "Venerdì"),
    ("Saturday", "Sabato"),
    ("Sunday", "Domenica"),

    // Months
    ("January", "Gennaio"),
    ("February", "Febbraio"),
    ("March", "Marzo"),
    ("April", "Aprile"),
    ("May", "Maggio"),
    ("June", "Giugno"),
    ("July", "Luglio"),
    ("August", "Agosto"),
    ("September", "Settembre"),
    ("October", "Ottobre"),
    ("November", "Novembre"),
    ("December", "Dicembre"),
];
