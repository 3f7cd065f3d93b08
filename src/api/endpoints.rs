//! Remote paths, exactly as the backend routes them.

pub const GOODS_LIST: &str = "/good/getAll";
pub const GOODS_ADD: &str = "/elec/add";
pub const GOODS_UPDATE_PRICE: &str = "/good/updateGoodPrice";
pub const GOODS_DELETE_PREFIX: &str = "/elec/delete/";
pub const GOODS_BY_OWNER: &str = "/good/getGoodByOwner";
pub const GOODS_GET: &str = "/good/getGood";

pub const PROPOSALS_BY_SELLER: &str = "/proposal/getProposalBySeller";
pub const PROPOSALS_BY_BUYER: &str = "/proposal/getProposalByBuyer";
pub const PROPOSAL_SET: &str = "/proposal/setProposal";
pub const PROPOSAL_UPDATE: &str = "/proposal/updateProposal";
pub const PROPOSAL_GET: &str = "/proposal/getProposal";
pub const PROPOSAL_BY_ORDER_NUM: &str = "/proposal/getProposalByOrderNum";
pub const ORDER_DELETE_PREFIX: &str = "/order/delete/";

pub const USER_SUBMIT_ORDER: &str = "/user/submitOrder";
pub const USER_UPDATE_ORDER: &str = "/user/updateOrder";
pub const USER_LOGIN: &str = "/user/login";
pub const USER_INFO: &str = "/user/info";
pub const USER_LOGOUT: &str = "/user/logout";
pub const USER_GET_WALLET: &str = "/user/getwallet";
pub const USER_SET_WALLET: &str = "/user/setwallet";
