//! Literal operator compatibility data.
//!
//! One row per operator token. Support columns follow `Profile::ALL` order
//! (4.0, 5.0, 6.0). The 6.0 emulation target lists an operator as supported
//! only once it works across all commands and CRUD paths; until then it
//! stays `No` so reports never under-count migration work.

use super::{KeywordEntry, Support::{No, Yes}};

pub static OPERATORS: &[KeywordEntry] = &[
    KeywordEntry { token: "$$CURRENT", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$$DESCEND", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$$KEEP", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$$PRUNE", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$$REMOVE", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$$ROOT", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$abs", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$accumulator", introduced: "4.4", support: [No, No, No] },
    KeywordEntry { token: "$acos", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$acosh", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$add", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$addFields", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$addToSet", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$all", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$allElementsTrue", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$and", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$anyElementTrue", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$arrayElemAt", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$arrayToObject", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$asin", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$asinh", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$atan", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$atan2", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$atanh", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$avg", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$binarySize", introduced: "4.4", support: [No, Yes, No] },
    KeywordEntry { token: "$bit", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$bitsAllClear", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$bitsAllSet", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$bitsAnyClear", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$bitsAnySet", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$bottom", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$bottomN", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$box", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$bsonSize", introduced: "4.4", support: [No, Yes, No] },
    KeywordEntry { token: "$bucket", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$bucketAuto", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$ceil", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$center", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$centerSphere", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$cmp", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$collStats", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$comment", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$concat", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$concatArrays", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$cond", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$convert", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$cos", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$cosh", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$count", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$currentDate", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$currentOp", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$dateAdd", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$dateDiff", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$dateFromParts", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$dateFromString", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$dateSubtract", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$dateToParts", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$dateToString", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$dateTrunc", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$dayOfMonth", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$dayOfWeek", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$dayOfYear", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$degreesToRadians", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$densify", introduced: "5.1", support: [No, No, No] },
    KeywordEntry { token: "$divide", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$documents", introduced: "5.1", support: [No, No, No] },
    KeywordEntry { token: "$each", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$elemMatch", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$eq", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$exists", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$exp", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$expr", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$facet", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$fill", introduced: "5.3", support: [No, No, No] },
    KeywordEntry { token: "$filter", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$first", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$firstN", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$floor", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$function", introduced: "4.4", support: [No, No, No] },
    KeywordEntry { token: "$geoIntersects", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$geometry", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$geoNear", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$geoWithin", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$getField", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$graphLookup", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$group", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$gt", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$gte", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$hour", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$ifNull", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$in", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$inc", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$indexOfArray", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$indexOfBytes", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$indexOfCP", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$indexStats", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$isArray", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$isNumber", introduced: "4.4", support: [No, Yes, No] },
    KeywordEntry { token: "$isoDayOfWeek", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$isoWeek", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$isoWeekYear", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$jsonSchema", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$last", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$lastN", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$let", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$limit", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$linearFill", introduced: "5.3", support: [No, No, No] },
    KeywordEntry { token: "$listLocalSessions", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$listSessions", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$literal", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$ln", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$locf", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$log", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$log10", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$lookup", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$lt", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$lte", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$ltrim", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$map", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$match", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$max", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$maxDistance", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$maxN", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$merge", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$mergeObjects", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$meta", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$millisecond", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$min", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$minDistance", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$minN", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$minute", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$mod", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$month", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$mul", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$multiply", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$natural", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$ne", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$near", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$nearSphere", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$nin", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$nor", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$not", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$objectToArray", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$or", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$out", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$planCacheStats", introduced: "4.2", support: [No, No, No] },
    KeywordEntry { token: "$polygon", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$pop", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$position", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$pow", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$project", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$pull", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$pullAll", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$push", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$radiansToDegrees", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$rand", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$range", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$redact", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$reduce", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$regex", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$regexFind", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$regexFindAll", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$regexMatch", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$rename", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$replaceAll", introduced: "4.4", support: [No, Yes, No] },
    KeywordEntry { token: "$replaceOne", introduced: "4.4", support: [No, Yes, No] },
    KeywordEntry { token: "$replaceRoot", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$replaceWith", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$reverseArray", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$round", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$rtrim", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$sample", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$sampleRate", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$second", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$set", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$setDifference", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$setEquals", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$setField", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$setIntersection", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$setIsSubset", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$setOnInsert", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$setUnion", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$setWindowFields", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$sin", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$sinh", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$size", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$skip", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$slice", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$sort", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$sortArray", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$sortByCount", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$split", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$sqrt", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$stdDevPop", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$stdDevSamp", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$strcasecmp", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$strLenBytes", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$strLenCP", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$substr", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$substrBytes", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$substrCP", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$subtract", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$sum", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$switch", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$tan", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$tanh", introduced: "4.2", support: [No, Yes, No] },
    KeywordEntry { token: "$text", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$toBool", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$toDate", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$toDecimal", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$toDouble", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$toInt", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$toLong", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$toLower", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$toObjectId", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$top", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$topN", introduced: "5.2", support: [No, No, No] },
    KeywordEntry { token: "$toString", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$toUpper", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$trim", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$trunc", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$tsIncrement", introduced: "5.1", support: [No, No, No] },
    KeywordEntry { token: "$tsSecond", introduced: "5.1", support: [No, No, No] },
    KeywordEntry { token: "$type", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$unionWith", introduced: "4.4", support: [No, Yes, No] },
    KeywordEntry { token: "$uniqueDocs", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$unset", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$unsetField", introduced: "6.0", support: [No, No, No] },
    KeywordEntry { token: "$unwind", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$week", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$where", introduced: "4.0", support: [No, No, No] },
    KeywordEntry { token: "$year", introduced: "4.0", support: [Yes, Yes, No] },
    KeywordEntry { token: "$zip", introduced: "4.0", support: [Yes, Yes, No] },
];
