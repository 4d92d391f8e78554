use serde_repr::{Deserialize_repr, Serialize_repr};

/// The closed set of ReQL operations, each with its fixed wire code.
///
/// The discriminants are the integer codes the server dispatches on. They
/// are part of the protocol and are never reused for a different operation
/// across protocol versions.
#[derive(Serialize_repr, Deserialize_repr, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TermType {
    // A raw literal value. Encoded args of a Datum node carry the value
    // itself rather than nested terms.
    Datum = 1,
    // Literal collections on the wire: a bare JSON array always means a
    // term, so client-side arrays are wrapped in MakeArray.
    MakeArray = 2,
    MakeObj = 3,

    // Variables and evaluation
    Var = 10,
    JavaScript = 11,
    Error = 12,
    ImplicitVar = 13,

    // Data sources
    Db = 14,
    Table = 15,
    Get = 16,
    GetAll = 78,

    // Comparison
    Eq = 17,
    Ne = 18,
    Lt = 19,
    Le = 20,
    Gt = 21,
    Ge = 22,
    Not = 23,

    // Arithmetic
    Add = 24,
    Sub = 25,
    Mul = 26,
    Div = 27,
    Mod = 28,
    Floor = 183,
    Ceil = 184,
    Round = 185,

    // Array operations
    Append = 29,
    Prepend = 80,
    Difference = 95,
    SetInsert = 88,
    SetIntersection = 89,
    SetUnion = 90,
    SetDifference = 91,
    Slice = 30,
    Skip = 70,
    Limit = 71,
    OffsetsOf = 87,
    Contains = 93,
    InsertAt = 82,
    DeleteAt = 83,
    ChangeAt = 84,
    SpliceAt = 85,

    // Object operations
    GetField = 31,
    Keys = 94,
    Values = 186,
    Object = 143,
    HasFields = 32,
    WithFields = 96,
    Pluck = 33,
    Without = 34,
    Merge = 35,

    // Sequence operations
    Between = 182,
    Reduce = 37,
    Map = 38,
    Fold = 187,
    Filter = 39,
    ConcatMap = 40,
    OrderBy = 41,
    Distinct = 42,
    Count = 43,
    IsEmpty = 86,
    Union = 44,
    Nth = 45,
    Bracket = 170,
    InnerJoin = 48,
    OuterJoin = 49,
    EqJoin = 50,
    Zip = 72,
    Range = 173,

    // Type inspection and coercion
    CoerceTo = 51,
    TypeOf = 52,
    Info = 79,

    // Write operations
    Update = 53,
    Delete = 54,
    Replace = 55,
    Insert = 56,

    // Administration
    DbCreate = 57,
    DbDrop = 58,
    DbList = 59,
    TableCreate = 60,
    TableDrop = 61,
    TableList = 62,
    Config = 174,
    Status = 175,
    Wait = 177,
    Reconfigure = 176,
    Rebalance = 179,
    Sync = 138,
    Grant = 188,
    IndexCreate = 75,
    IndexDrop = 76,
    IndexList = 77,
    IndexStatus = 139,
    IndexWait = 140,
    IndexRename = 156,
    SetWriteHook = 189,
    GetWriteHook = 190,

    // Control flow
    Funcall = 64,
    Branch = 65,
    Or = 66,
    And = 67,
    ForEach = 68,
    Func = 69,
    Asc = 73,
    Desc = 74,
    Default = 92,

    // Strings
    Match = 97,
    Upcase = 141,
    Downcase = 142,
    Split = 149,

    // Aggregation
    Group = 144,
    Sum = 145,
    Avg = 146,
    Min = 147,
    Max = 148,
    Ungroup = 150,

    // Misc generators
    Sample = 81,
    Json = 98,
    Random = 151,
    Changes = 152,
    Http = 153,
    Args = 154,
    Binary = 155,
    Uuid = 169,
    Minval = 180,
    Maxval = 181,

    // Dates and times
    Iso8601 = 99,
    ToIso8601 = 100,
    EpochTime = 101,
    ToEpochTime = 102,
    Now = 103,
    InTimezone = 104,
    During = 105,
    Date = 106,
    TimeOfDay = 126,
    Timezone = 127,
    Year = 128,
    Month = 129,
    Day = 130,
    DayOfWeek = 131,
    DayOfYear = 132,
    Hours = 133,
    Minutes = 134,
    Seconds = 135,
    Time = 136,
    Monday = 107,
    Tuesday = 108,
    Wednesday = 109,
    Thursday = 110,
    Friday = 111,
    Saturday = 112,
    Sunday = 113,
    January = 114,
    February = 115,
    March = 116,
    April = 117,
    May = 118,
    June = 119,
    July = 120,
    August = 121,
    September = 122,
    October = 123,
    November = 124,
    December = 125,
    Literal = 137,

    // Geospatial
    Geojson = 157,
    ToGeojson = 158,
    Point = 159,
    Line = 160,
    Polygon = 161,
    Distance = 162,
    Intersects = 163,
    Includes = 164,
    Circle = 165,
    GetIntersecting = 166,
    Fill = 167,
    GetNearest = 168,
    PolygonSub = 171,

    // Bit operations
    BitAnd = 191,
    BitOr = 192,
    BitXor = 193,
    BitNot = 194,
    BitSal = 195,
    BitSar = 196,
}

impl TermType {
    /// The integer wire code for this operation.
    pub fn code(self) -> u32 {
        self as u32
    }
}
