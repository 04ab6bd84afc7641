//! Named trial counters ("kill counts") that feed drop models.

use crate::NamedEnum;

/// A kill count, completion count or similar counter shown in the collection log.
///
/// The display name is what the ledger is keyed by; lookups ignore case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, NamedEnum)]
pub enum TrialSource {
    #[name = "Abyssal Sire kills"]
    AbyssalSireKills,
    #[name = "Alchemical Hydra kills"]
    AlchemicalHydraKills,
    #[name = "Amoxliatl kills"]
    AmoxliatlKills,
    #[name = "Araxxor kills"]
    AraxxorKills,
    #[name = "Artio kills"]
    ArtioKills,
    #[name = "Barrows Chests opened"]
    BarrowsChestsOpened,
    #[name = "Beginner clues completed"]
    BeginnerCluesCompleted,
    #[name = "Bryophyta kills"]
    BryophytaKills,
    #[name = "Callisto kills"]
    CallistoKills,
    #[name = "Calvar'ion kills"]
    CalvarionKills,
    #[name = "Cerberus kills"]
    CerberusKills,
    #[name = "Chambers of Xeric (CM) completions"]
    ChambersOfXericCmCompletions,
    #[name = "Chambers of Xeric completions"]
    ChambersOfXericCompletions,
    #[name = "Chaos Elemental kills"]
    ChaosElementalKills,
    #[name = "Chaos Fanatic kills"]
    ChaosFanaticKills,
    #[name = "Commander Zilyana kills"]
    CommanderZilyanaKills,
    #[name = "Corporeal Beast kills"]
    CorporealBeastKills,
    #[name = "Corrupted Gauntlet completion count"]
    CorruptedGauntletCompletionCount,
    #[name = "Crazy Archaeologist kills"]
    CrazyArchaeologistKills,
    #[name = "Dagannoth Prime kills"]
    DagannothPrimeKills,
    #[name = "Dagannoth Rex kills"]
    DagannothRexKills,
    #[name = "Dagannoth Supreme kills"]
    DagannothSupremeKills,
    #[name = "Deep delves"]
    DeepDelves,
    #[name = "Deepest delve"]
    DeepestDelve,
    #[name = "Demonic Gorilla kills"]
    DemonicGorillaKills,
    #[name = "Deranged Archaeologist kills"]
    DerangedArchaeologistKills,
    #[name = "Duke Sucellus kills"]
    DukeSucellusKills,
    #[name = "Easy clues completed"]
    EasyCluesCompleted,
    #[name = "Elite clues completed"]
    EliteCluesCompleted,
    #[name = "Gauntlet completion count"]
    GauntletCompletionCount,
    #[name = "General Graardor kills"]
    GeneralGraardorKills,
    #[name = "Giant Mole kills"]
    GiantMoleKills,
    #[name = "Gnome restaurant easy deliveries"]
    GnomeRestaurantEasyDeliveries,
    #[name = "Gnome restaurant hard deliveries"]
    GnomeRestaurantHardDeliveries,
    #[name = "Grand Hallowed Coffins opened"]
    GrandHallowedCoffinsOpened,
    #[name = "Grotesque Guardian kills"]
    GrotesqueGuardianKills,
    #[name = "Hard clues completed"]
    HardCluesCompleted,
    #[name = "Hespori kills"]
    HesporiKills,
    #[name = "High-level Gambles"]
    HighLevelGambles,
    #[name = "Hueycoatl kills"]
    HueycoatlKills,
    #[name = "Kalphite Queen kills"]
    KalphiteQueenKills,
    #[name = "King Black Dragon kills"]
    KingBlackDragonKills,
    #[name = "Kraken kills"]
    KrakenKills,
    #[name = "Kree'arra kills"]
    KreearraKills,
    #[name = "K'ril Tsutsaroth kills"]
    KrilTsutsarothKills,
    #[name = "Last Man Standing games played"]
    LastManStandingGamesPlayed,
    #[name = "Last Man Standing Kills"]
    LastManStandingKills,
    #[name = "Last Man Standing Wins"]
    LastManStandingWins,
    #[name = "Leviathan kills"]
    LeviathanKills,
    #[name = "Lunar Chests opened"]
    LunarChestsOpened,
    #[name = "Master clues completed"]
    MasterCluesCompleted,
    #[name = "Medium clues completed"]
    MediumCluesCompleted,
    #[name = "Nex kills"]
    NexKills,
    #[name = "Nightmare kills"]
    NightmareKills,
    #[name = "Obor kills"]
    OborKills,
    #[name = "Orders fulfilled"]
    OrdersFulfilled,
    #[name = "Phantom Muspah kills"]
    PhantomMuspahKills,
    #[name = "Phosani's Nightmare kills"]
    PhosanisNightmareKills,
    #[name = "Revenant kills"]
    RevenantKills,
    #[name = "Reward permits claimed"]
    RewardPermitsClaimed,
    #[name = "Rewards claimed"]
    RewardsClaimed,
    #[name = "Rifts closed"]
    RiftsClosed,
    #[name = "Rifts searches"]
    RiftsSearches,
    #[name = "Royal Titan kills"]
    RoyalTitanKills,
    #[name = "Rumours Completed"]
    RumoursCompleted,
    #[name = "Sarachnis kills"]
    SarachnisKills,
    #[name = "Scorpia kills"]
    ScorpiaKills,
    #[name = "Scurrius kills"]
    ScurriusKills,
    #[name = "Shellbane Gryphon kills"]
    ShellbaneGryphonKills,
    #[name = "Skotizo kills"]
    SkotizoKills,
    #[name = "Sol Heredit kills"]
    SolHereditKills,
    #[name = "Spindel kills"]
    SpindelKills,
    #[name = "Spoils of war opened"]
    SpoilsOfWarOpened,
    #[name = "Swords created"]
    SwordsCreated,
    #[name = "Tempoross kills"]
    TemporossKills,
    #[name = "Theatre of Blood completions"]
    TheatreOfBloodCompletions,
    #[name = "Theatre of Blood (Entry) completions"]
    TheatreOfBloodEntryCompletions,
    #[name = "Theatre of Blood (Hard) completions"]
    TheatreOfBloodHardCompletions,
    #[name = "Thermonuclear Smoke Devil kills"]
    ThermonuclearSmokeDevilKills,
    #[name = "Tombs of Amascut completions"]
    TombsOfAmascutCompletions,
    #[name = "Tombs of Amascut (Entry) completions"]
    TombsOfAmascutEntryCompletions,
    #[name = "Tombs of Amascut (Expert) completions"]
    TombsOfAmascutExpertCompletions,
    #[name = "Tormented Demon kills"]
    TormentedDemonKills,
    #[name = "Tortured Gorilla kills"]
    TorturedGorillaKills,
    #[name = "Total clues completed"]
    TotalCluesCompleted,
    #[name = "Total delves"]
    TotalDelves,
    #[name = "TzKal-Zuk kills"]
    TzkalZukKills,
    #[name = "TzTok-Jad kills"]
    TztokJadKills,
    #[name = "Vardorvis kills"]
    VardorvisKills,
    #[name = "Venenatis kills"]
    VenenatisKills,
    #[name = "Vet'ion kills"]
    VetionKills,
    #[name = "Vorkath kills"]
    VorkathKills,
    #[name = "Whisperer kills"]
    WhispererKills,
    #[name = "Wintertodt kills"]
    WintertodtKills,
    #[name = "Yama kills"]
    YamaKills,
    #[name = "Zalcano kills"]
    ZalcanoKills,
    #[name = "Zulrah kills"]
    ZulrahKills,
}
